//! Forum API server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forum_api::adapters::http::{api_router, with_service_layers, ForumHandlers};
use forum_api::adapters::postgres::MIGRATOR;
use forum_api::adapters::{
    JwtSessionValidator, PostgresCommentRepository, PostgresReplyRepository,
    PostgresThreadRepository, UuidIdGenerator,
};
use forum_api::config::AppConfig;
use forum_api::ports::IdGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let pool = config.database.pool_options().connect(&config.database.url).await?;
    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        MIGRATOR.run(&pool).await?;
    }

    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
    let handlers = ForumHandlers::new(
        Arc::new(PostgresThreadRepository::new(pool.clone(), id_generator.clone())),
        Arc::new(PostgresCommentRepository::new(pool.clone(), id_generator.clone())),
        Arc::new(PostgresReplyRepository::new(pool.clone(), id_generator)),
    );
    let validator = Arc::new(JwtSessionValidator::new(&config.auth.access_token_key));

    let app = with_service_layers(
        api_router(handlers, validator),
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Forum API listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
