use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Deployment stage the scorecard service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Process configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
            Err(_) => DEFAULT_PORT,
        };
        let max_body_bytes = match env::var("APP_MAX_BODY_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|bytes| *bytes > 0)
                .ok_or(ConfigError::InvalidBodyLimit(raw))?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                max_body_bytes,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// HTTP binding and request limits for the scoring endpoints.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST '{host}' must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
    #[error("APP_MAX_BODY_BYTES must be a positive integer, got '{0}'")]
    InvalidBodyLimit(String),
}
