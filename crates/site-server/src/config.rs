//! Command-line and environment configuration for the site backend.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5000";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_RATE_LIMIT_MAX: u32 = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024;
pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Backend settings. Each flag falls back to an environment variable where
/// one is named, then to the built-in default.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "site-server", about = "Pearlmeen Media site backend")]
pub struct ServerConfig {
    /// Port to listen on (0 picks a free port).
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Origin allowed by CORS.
    #[arg(long, env = "CLIENT_URL", default_value = DEFAULT_CLIENT_URL)]
    pub client_url: String,

    /// Directory served for non-API GET/HEAD requests.
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Deployment label, logged at startup.
    #[arg(long, env = "APP_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Requests allowed per client IP in one window.
    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT_MAX)]
    pub rate_limit_max: u32,

    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT_WINDOW_SECS)]
    pub rate_limit_window_secs: u64,

    /// Largest accepted request body.
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT_BYTES)]
    pub body_limit_bytes: usize,

    /// Request worker threads.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_owned(),
            client_url: DEFAULT_CLIENT_URL.to_owned(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            environment: DEFAULT_ENVIRONMENT.to_owned(),
            rate_limit_max: DEFAULT_RATE_LIMIT_MAX,
            rate_limit_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            workers: DEFAULT_WORKERS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.client_url, "http://localhost:5000");
        assert_eq!(config.rate_limit_max, 100);
        assert_eq!(config.rate_limit_window(), Duration::from_secs(900));
        assert_eq!(config.body_limit_bytes, 10_240);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "site-server",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--client-url",
            "https://pearlmeen.example",
            "--static-dir",
            "/srv/site",
            "--environment",
            "production",
            "--rate-limit-max",
            "3",
            "--rate-limit-window-secs",
            "60",
            "--body-limit-bytes",
            "512",
            "--workers",
            "2",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.client_url, "https://pearlmeen.example");
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.environment, "production");
        assert_eq!(config.rate_limit_max, 3);
        assert_eq!(config.rate_limit_window(), Duration::from_secs(60));
        assert_eq!(config.body_limit_bytes, 512);
        assert_eq!(config.workers, 2);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["site-server", "--port", "http"]).is_err());
    }
}
