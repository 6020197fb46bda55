use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::controllers;
use crate::{health, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(controllers::list_users))
        .layer(Extension(state))
}
