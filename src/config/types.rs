// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub statics: StaticConfig,
    pub orders: OrdersConfig,
    pub logging: LoggingConfig,
    /// Internal session key, from the `SESSION_SECRET` environment variable
    /// with a fixed fallback. Held for session-signing use; no current
    /// endpoint consumes it.
    #[allow(dead_code)]
    pub session_secret: String,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub max_connections: Option<u64>,
    pub keep_alive_timeout: u64,
    pub request_timeout: u64,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// Public asset directory
    pub dir: String,
    /// Landing document served for the root path
    pub index_file: String,
}

/// Order persistence configuration
#[derive(Debug, Deserialize, Clone)]
pub struct OrdersConfig {
    /// Directory where submitted orders are written
    pub dir: String,
    /// What the intake endpoint reports when a write fails
    pub on_persist_failure: PersistFailurePolicy,
}

/// Policy applied when writing an order to disk fails.
///
/// `Ignore` keeps the original demo behaviour: the client is acknowledged
/// even though nothing was saved.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersistFailurePolicy {
    /// Log the failure and still acknowledge the submission
    Ignore,
    /// Surface the failure as an error response
    Reject,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined or json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}
