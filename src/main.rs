use std::sync::Arc;

use entity_llm_api::config::AppConfig;
use entity_llm_api::llm::{GroqClient, OpenAiClient};
use entity_llm_api::routes::configure_routes;
use entity_llm_api::state::AppState;
use entity_llm_api::store::PgEntityStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // Fail fast if the database is unreachable
    let store = PgEntityStore::new(config.database.build_pool()?);
    store.ensure_schema().await?;
    tracing::info!(
        host = %config.database.host,
        database = %config.database.database,
        "Connected to the PostgreSQL database"
    );

    let state = AppState::new(
        Arc::new(store),
        OpenAiClient::new(config.openai.clone())?,
        GroqClient::new(config.groq.clone())?,
    );
    let routes = configure_routes(state);

    let addr = config.listen_addr();
    tracing::info!("Server is running on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
