mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        upstream = %config.api_upstream_url,
        timeout_secs = config.api_timeout.as_secs(),
        "api proxy configured"
    );

    let state = state::AppState::new(config).expect("http client init failed");

    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portail listening");
    axum::serve(listener, app).await.expect("server failed");
}
