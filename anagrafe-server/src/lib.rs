use anagrafe_core::models::User;
use anyhow::Context;
use axum::http::StatusCode;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppState {
    /// Lista utenti servita da GET /users. Costruita una volta all'avvio,
    /// mai mutata: l'handler la legge soltanto.
    pub users: Vec<User>,
}

/// Costruisce la lista utenti statica servita dal backend.
/// È l'unica "sorgente dati" del processo: nessun DB, nessun file.
pub fn seed_users() -> Vec<User> {
    vec![
        User { id: 1, name: "Alice".to_string() },
        User { id: 2, name: "Bob".to_string() },
    ]
}

/// Legge l'indirizzo di binding dalla variabile d'ambiente BIND_ADDR.
/// Se non è impostata, usa "0.0.0.0:3000" (tutte le interfacce, porta 3000).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let addr: SocketAddr = raw.parse().context("parse BIND_ADDR")?;
    Ok(addr)
}

pub mod controllers;
pub mod routes;

/// Probe di vitalità: il backend non ha dipendenze esterne da controllare,
/// quindi se risponde è sano.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
