#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    let leptos_options = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?.leptos_options;

    tracing::info!(upstream = %config.api_upstream, body_limit = config.body_limit_bytes, "api proxy configured");
    let state = state::AppState::new(config)?;
    let app = routes::app(state, leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "reframe listening");
    axum::serve(listener, app).await?;
    Ok(())
}
