use crate::models::User;

/*
    Contratto HTTP: una sola operazione, GET /users.
    Nessun parametro, nessun body di richiesta, nessun header riconosciuto.
*/

/// Percorso dell'unica rotta esposta dal backend.
pub const USERS_PATH: &str = "/users";

/// Corpo della risposta di GET /users: un array JSON "nudo" di utenti,
/// nell'ordine in cui il backend li ha caricati all'avvio (niente envelope).
pub type ListUsersResponse = Vec<User>;
