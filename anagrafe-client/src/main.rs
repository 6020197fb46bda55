use anagrafe_client::{backend_url, fetch_users, render_users};

#[tokio::main]
async fn main() {
    let base = backend_url();
    // una sola chiamata: o stampa la lista o il motivo del fallimento.
    // In entrambi i casi il processo termina normalmente, senza retry.
    match fetch_users(&base).await {
        Ok(users) => print!("{}", render_users(&users)),
        Err(e) => eprintln!("Error calling service: {:#}", e),
    }
}
