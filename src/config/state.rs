// Application state module
// Explicit state passed to request handlers instead of process globals

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Shared application state, constructed once at startup and handed to
/// every request handler behind an `Arc`
pub struct AppState {
    pub config: Config,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            cached_access_log,
        }
    }
}
