use tracing_subscriber::EnvFilter;

use blogtools_server::config::Config;
use blogtools_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; the process environment still applies.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = blogtools_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        model = %config.model.model,
        public_base_url = %config.public_base_url,
        "blogtools server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
