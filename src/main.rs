use tracing_subscriber::EnvFilter;

use transactional_proxy::adapter::config::AppConfig;
use transactional_proxy::adapter::init::AppInitializer;
use transactional_proxy::adapter::web::create_router::create_router;
use transactional_proxy::error::ApplicationError;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let state = AppInitializer::initialize(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))?;
    tracing::info!(address = %config.bind_address(), "server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))
}
