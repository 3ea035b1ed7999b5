#[tokio::main]
async fn main() {
    shoplite_observability::init();

    let listen_addr =
        std::env::var("SHOPLITE_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = shoplite_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
