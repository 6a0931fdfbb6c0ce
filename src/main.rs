use teamspace_api::{config, routes, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up APP_ENV, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Teamspace API in {:?} mode", config.environment);

    // The external platform client would be wired in here; until one is
    // configured the in-memory store backs local development.
    let state = AppState::in_memory();
    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Teamspace API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
