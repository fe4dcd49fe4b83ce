use std::env;

/// Application-level constants
pub const APP_NAME: &str = "MediSense";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default remote backend (record stores + AI endpoints).
pub const DEFAULT_BACKEND_URL: &str = "https://medisensebackend.onrender.com";

/// Default per-request timeout for backend calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Backend base URL, overridable via MEDISENSE_BACKEND_URL.
pub fn backend_url() -> String {
    env::var("MEDISENSE_BACKEND_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

/// Request timeout in seconds, overridable via MEDISENSE_REQUEST_TIMEOUT_SECS.
pub fn request_timeout_secs() -> u64 {
    env::var("MEDISENSE_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}
