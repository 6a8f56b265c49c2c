//! Service configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the binary runs out of the box on a developer machine.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to the SQLite database file (default: "./kasir.db").
    pub database_path: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// The listen port honors `PORT` first (set by most hosting platforms),
    /// then `APP_PORT`, then falls back to 8080.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .or_else(|_| std::env::var("APP_PORT"))
            .unwrap_or_else(|_| "8080".into());

        Self {
            listen_addr: format!("0.0.0.0:{port}"),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./kasir.db".into()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            database_path: "./kasir.db".into(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.database_path, "./kasir.db");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.request_timeout_seconds, 30);
    }
}
