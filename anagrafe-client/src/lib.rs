//! anagrafe-client: esegue una singola GET /users verso il backend e
//! stampa il risultato. Nessun retry, nessun polling: una chiamata sola.

use anagrafe_core::models::User;
use anagrafe_core::protocol::http::USERS_PATH;
use anyhow::Context;

/// Legge l'URL base del backend dalla variabile d'ambiente BACKEND_URL.
/// Se non è impostata, usa il backend locale sulla porta di default.
pub fn backend_url() -> String {
    std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
}

/// Esegue la chiamata GET /users e decodifica il body nella lista utenti.
/// Ogni fallimento (connessione, status non-2xx, body malformato) diventa
/// lo stesso tipo di errore: "richiesta fallita", con il contesto del passo.
pub async fn fetch_users(base_url: &str) -> anyhow::Result<Vec<User>> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), USERS_PATH);

    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("request to {}", url))?;
    // un status non-2xx è un errore, non un payload da stampare
    let resp = resp
        .error_for_status()
        .context("backend returned an error status")?;
    let users: Vec<User> = resp.json().await.context("decode users payload")?;

    Ok(users)
}

/// Formatta la lista utenti per la stampa su stdout, una riga per record.
pub fn render_users(users: &[User]) -> String {
    let mut out = String::from("Users from backend:\n");
    for u in users {
        out.push_str(&format!("- {}: {}\n", u.id, u.name));
    }
    out
}
