use serde::{Deserialize, Serialize};

/// Utente esposto sul filo tra client e server (non è un modello di DB).
/// L'ordine dei campi è quello di serializzazione: prima `id`, poi `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}
