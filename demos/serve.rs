use axum::extract::Path;
use axum::Router;
use std::net::SocketAddr;
use yellowpages::{Endpoint, Handle, Service};

async fn show_user(Path(id): Path<u32>) -> String {
    format!("user {id}")
}

#[tokio::main]
async fn main() {
    let users = Service::new()
        .with(Endpoint::get("/users"), Handle::new(|| async { "ada, grace" }))
        .with(Endpoint::get("/users/{id}"), Handle::new(show_user))
        .with(Endpoint::post("/users"), Handle::new(|| async { "created" }));

    let mut app: Router = Router::new();
    users.register(&mut app).unwrap();

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    println!("Users service is listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
