use axum::{extract::Extension, Json};
use anagrafe_core::models::User;
use std::sync::Arc;

use crate::AppState;

/// Handler per GET /users
/// Nessun input, nessuna condizione d'errore: serializza la lista statica
/// a ogni richiesta e la ritorna con status 200.
pub async fn list_users(Extension(state): Extension<Arc<AppState>>) -> Json<Vec<User>> {
    tracing::info!("GET /users: serving {} users", state.users.len());
    // Json(...) imposta content-type application/json e status 200
    Json(state.users.clone())
}
