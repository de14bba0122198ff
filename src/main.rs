//! Clarity Compass server binary.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clarity_compass::adapters::ai::GeminiProvider;
use clarity_compass::adapters::gateway::AiGoalGateway;
use clarity_compass::adapters::http::{app_router, PlanningAppState};
use clarity_compass::adapters::storage::InMemorySessionStore;
use clarity_compass::application::handlers::planning::{ExpireIdleSessionsHandler, GenerationRunner};
use clarity_compass::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    if !config.ai.has_api_key() {
        tracing::warn!("No Gemini API key configured; goal generation will fail until one is set");
    }

    let provider = GeminiProvider::new(config.ai.gemini_config())?;
    let gateway = AiGoalGateway::new(Arc::new(provider));
    let runner = GenerationRunner::new(Arc::new(gateway), config.ai.timeout());
    let store = Arc::new(InMemorySessionStore::new());
    spawn_session_sweeper(ExpireIdleSessionsHandler::new(
        store.clone(),
        config.server.session_idle(),
    ));
    let state = PlanningAppState::new(store, runner);

    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, model = %config.ai.model, "Clarity Compass listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// How often idle sessions are looked for.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

fn spawn_session_sweeper(expire: ExpireIdleSessionsHandler) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            expire.handle().await;
        }
    });
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
