use anyhow::Context;
use std::sync::Arc;

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use anagrafe_server::{bind_addr, routes, seed_users, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Inizializza il logging: RUST_LOG se impostata, altrimenti "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Costruisci la lista utenti una volta sola e passala al router dentro lo stato condiviso
    let state = Arc::new(AppState { users: seed_users() });
    let app = routes::router(state);

    // Ottieni l'indirizzo di binding dal env o usa il default
    let addr = bind_addr()?;
    println!("Backend running on http://{}", addr);

    // Crea il listener TCP e avvia il server Axum
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
