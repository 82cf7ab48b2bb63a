#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let backend = Arc::new(services::backend::BackendClient::new(&config).expect("backend client init failed"));
    tracing::info!(backend_url = %config.backend_url, cookie_secure = config.cookie_secure, "backend client initialized");

    let state = state::AppState::new(config, backend.clone(), backend);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "visualbug listening");
    axum::serve(listener, app).await.expect("server failed");
}
