//! helix-outreach server entry point.
//!
//! 1. Load and validate configuration from the environment.
//! 2. Initialise tracing.
//! 3. Connect to PostgreSQL and apply migrations.
//! 4. Build the OpenAI provider.
//! 5. Serve the HTTP API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use helix_outreach::adapters::ai::{OpenAIConfig, OpenAIProvider};
use helix_outreach::adapters::http::{build_router, AppState};
use helix_outreach::adapters::postgres::{
    self, PostgresMessageRepository, PostgresSequenceRepository, PostgresSessionRepository,
    PostgresUserRepository,
};
use helix_outreach::config::AppConfig;
use helix_outreach::ports::AIProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "helix-outreach starting"
    );

    let pool = postgres::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
        info!("Database migrations applied");
    }

    let provider = OpenAIProvider::new(OpenAIConfig::from_app_config(&config.ai))
        .context("failed to build OpenAI client")?;
    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "Language model configured");

    let state = AppState::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresSessionRepository::new(pool.clone())),
        Arc::new(PostgresMessageRepository::new(pool.clone())),
        Arc::new(PostgresSequenceRepository::new(pool)),
        Arc::new(provider),
    );
    let router = build_router(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("helix-outreach stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
