use std::sync::Arc;

use studyquest::api::{self, app_state::AppState};
use studyquest::config::loader::ConfigLoader;
use studyquest::security::auth::TokenVerifier;
use studyquest::security::identity::HttpIdentityProvider;
use studyquest::storage::PgStudyStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting StudyQuest...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let store = PgStudyStore::connect(&config.database).await?;
    store.init().await?;
    info!("Database pool initialized, migrations applied");

    let identity = HttpIdentityProvider::new(&config.identity);
    let verifier = TokenVerifier::new(&config.auth.secret);

    let app_state = AppState::new(Arc::new(store), Arc::new(identity), verifier);
    info!("Application state created");

    let router = api::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
