pub mod assistant; // Scripted question answering
pub mod backend; // Remote backend HTTP client
pub mod config;
pub mod interactions; // Static drug-interaction screening
pub mod models;
pub mod reminders; // Dose scheduling over the medication list
pub mod scan; // Scan report parsing
pub mod speech; // Capture/synthesis capability seams
pub mod state; // Application state + reducer

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding shell.
///
/// Honors RUST_LOG when set; otherwise falls back to the configured
/// default filter. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
