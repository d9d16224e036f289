//! Server startup utilities.

use techshop_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
  _______        _         _                      _       _           _
 |__   __|      | |       | |                    | |     | |         (_)
    | | ___  ___| |__  ___| |__   ___  _ __     / \   __| |_ __ ___  _ _ __
    | |/ _ \/ __| '_ \/ __| '_ \ / _ \| '_ \   / _ \ / _` | '_ ` _ \| | '_ \
    | |  __/ (__| | | \__ \ | | | (_) | |_) | / ___ \ (_| | | | | | | | | | |
    |_|\___|\___|_| |_|___/_| |_|\___/| .__/ /_/   \_\__,_|_| |_| |_|_|_| |_|
                                      | |
                                      |_|
    "
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", config.server.addr());
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("REST API:    {}/api/v1/products/dashboard", base);
    info!("Health:      {}/health", base);
    info!("API Docs:    {}/swagger-ui", base);
    info!("{}", separator);
}
