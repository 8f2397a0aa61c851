// Configuration module entry point
// Loads the typed configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, OrdersConfig, PersistFailurePolicy, ServerConfig,
    StaticConfig,
};

/// Fallback session key when `SESSION_SECRET` is not set
const DEFAULT_SESSION_SECRET: &str = "telegram_mini_app_secret";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.keep_alive_timeout", 75)?
            .set_default("server.request_timeout", 30)?
            .set_default("http.server_name", "MiniApp-Backend/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("statics.dir", "public")?
            .set_default("statics.index_file", "index.html")?
            .set_default("orders.dir", "orders")?
            .set_default("orders.on_persist_failure", "ignore")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("session_secret", DEFAULT_SESSION_SECRET)?
            .set_override_option("session_secret", std::env::var("SESSION_SECRET").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        std::env::remove_var("SESSION_SECRET");
        let cfg = Config::load_from("no-such-config").expect("defaults should load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.statics.dir, "public");
        assert_eq!(cfg.statics.index_file, "index.html");
        assert_eq!(cfg.orders.dir, "orders");
        assert_eq!(cfg.orders.on_persist_failure, PersistFailurePolicy::Ignore);
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.session_secret, DEFAULT_SESSION_SECRET);
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        std::env::remove_var("SESSION_SECRET");
        let cfg = Config::load_from("no-such-config").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("default address is valid");
        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_unspecified());
    }
}
