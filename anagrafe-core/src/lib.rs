//! anagrafe-core: tipi condivisi tra client e server (modello utente, contratto HTTP).
//! Niente I/O: solo il contratto sul filo.

pub mod models;
pub mod protocol;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use models::user::User;
pub use protocol::http::{ListUsersResponse, USERS_PATH};
