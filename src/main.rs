mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("Failed to open catalog store: {}", err);
            return Err(err);
        }
    };
    let http_client = startup::setup_reqwest_client()?;

    let app = router::app(AppState::new(db, http_client, config.book_search_url.clone()));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
