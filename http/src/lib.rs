use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use lectio_configuration::ServerConfig;

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::{error_mapper, HttpError};
pub use extract::ValidatedJson;
pub use handlers::*;
pub use state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    // Sample arrays serialized as JSON floats can be large; raise the
    // body limit on the evaluation route only.
    let evaluate_route =
        post(evaluate_reading).layer(DefaultBodyLimit::max(64 * 1024 * 1024));

    Router::new()
        .route("/health", get(health))
        .route("/api/reading/evaluate", evaluate_route)
        .with_state(state)
}

pub async fn serve(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "http server listening");
    axum::serve(listener, create_app_router(state)).await?;
    Ok(())
}
