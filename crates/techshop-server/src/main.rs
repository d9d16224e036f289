//! # Techshop Admin Server
//!
//! Serves the product dashboard API backed by MySQL.

use techshop_config::ConfigLoader;
use techshop_core::{telemetry::init_tracing, ShopError, ShopResult};
use techshop_repository::{create_pool, DatabasePoolInterface};
use techshop_rest::{create_router, AppState};
use techshop_server::{di::build_admin_module, startup};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> ShopResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_tracing(
        Some(&config.observability.log_level),
        config.observability.log_format,
    )?;
    config_loader.log_sources().await;

    startup::print_banner();
    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let db_pool = create_pool(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let module = build_admin_module(&db_pool);

    let app_state = AppState::new(module.product_service()).with_health_check(db_pool.clone());
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ShopError::Internal(format!("Failed to bind {addr}: {e}")))?;

    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ShopError::Internal(format!("REST server error: {e}")))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
