use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;

use crate::receipts::DEFAULT_ID_ATTEMPTS;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the receipt points service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let ansi = match env::var("APP_LOG_ANSI") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidLogAnsi)?,
            Err(_) => environment == AppEnvironment::Development,
        };

        let id_attempts = match env::var("APP_ID_ATTEMPTS") {
            Ok(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::InvalidIdAttempts)?,
            Err(_) => DEFAULT_ID_ATTEMPTS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            store: StoreConfig { id_attempts },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter and formatting controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Tuning for the in-memory score store.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Identifiers drawn per `put` before a collision is reported.
    pub id_attempts: NonZeroU32,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogAnsi,
    InvalidIdAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogAnsi => write!(f, "APP_LOG_ANSI must be true or false"),
            ConfigError::InvalidIdAttempts => {
                write!(f, "APP_ID_ATTEMPTS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogAnsi
            | ConfigError::InvalidIdAttempts => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_ANSI");
        env::remove_var("APP_ID_ATTEMPTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.ansi);
        assert_eq!(config.store.id_attempts, DEFAULT_ID_ATTEMPTS);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 9000));
        reset_env();
    }

    #[test]
    fn production_disables_ansi_unless_requested() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);

        env::set_var("APP_LOG_ANSI", "yes");
        let config = AppConfig::load().expect("config loads");
        assert!(config.telemetry.ansi);
        reset_env();
    }

    #[test]
    fn rejects_invalid_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        env::set_var("APP_PORT", "70000");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        env::remove_var("APP_PORT");

        env::set_var("APP_ID_ATTEMPTS", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidIdAttempts)
        ));
        env::remove_var("APP_ID_ATTEMPTS");

        env::set_var("APP_LOG_ANSI", "sometimes");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidLogAnsi)));
        reset_env();
    }

    #[test]
    fn rejects_unparseable_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "receipts.internal");
        let config = AppConfig::load().expect("host is only checked when binding");
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
        reset_env();
    }
}
