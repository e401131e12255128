//! Environment-driven configuration for the scoring service.
//!
//! Everything is read once at startup from `MAPLE_*` variables (a local `.env`
//! file is honored through dotenvy). The validator's input domain is part of the
//! configuration so operators can tighten or widen accepted profiles without a
//! rebuild.

use crate::scoring::ValidationLimits;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
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
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("MAPLE_ENV", "development"));
        let server = ServerConfig {
            host: var_or("MAPLE_HOST", "127.0.0.1"),
            port: parsed_var("MAPLE_PORT")?.unwrap_or(3000),
        };
        let telemetry = TelemetryConfig {
            log_filter: var_or("MAPLE_LOG", "info"),
        };
        let scoring = ScoringConfig::from_env()?;

        Ok(Self {
            environment,
            server,
            telemetry,
            scoring,
        })
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

/// Tracing directives, e.g. `info` or `maple_score=debug,info`.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_filter: String,
}

/// Overrides for the validator's input domain. Any `MAPLE_MIN_AGE`,
/// `MAPLE_MAX_AGE`, `MAPLE_MAX_EXPERIENCE_YEARS`, or `MAPLE_MAX_HOURLY_WAGE`
/// variable replaces the corresponding default limit.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub limits: ValidationLimits,
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mut limits = ValidationLimits::default();
        if let Some(min_age) = parsed_var("MAPLE_MIN_AGE")? {
            limits.min_age = min_age;
        }
        if let Some(max_age) = parsed_var("MAPLE_MAX_AGE")? {
            limits.max_age = max_age;
        }
        if let Some(years) = parsed_var("MAPLE_MAX_EXPERIENCE_YEARS")? {
            limits.max_experience_years = years;
        }
        if let Some(wage) = parsed_var("MAPLE_MAX_HOURLY_WAGE")? {
            limits.max_hourly_wage = wage;
        }
        Ok(Self { limits })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name }),
        Err(_) => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { name: &'static str },
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { name } => {
                write!(f, "environment variable {name} could not be parsed")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "MAPLE_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidValue { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
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
        for name in [
            "MAPLE_ENV",
            "MAPLE_HOST",
            "MAPLE_PORT",
            "MAPLE_LOG",
            "MAPLE_MIN_AGE",
            "MAPLE_MAX_AGE",
            "MAPLE_MAX_EXPERIENCE_YEARS",
            "MAPLE_MAX_HOURLY_WAGE",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_filter, "info");
        assert_eq!(config.scoring.limits, ValidationLimits::default());
    }

    #[test]
    fn production_environment_is_recognized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MAPLE_ENV", "production");
        env::set_var("MAPLE_PORT", "8443");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.server.port, 8443);
        reset_env();
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MAPLE_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn scoring_limits_override_the_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MAPLE_MIN_AGE", "21");
        env::set_var("MAPLE_MAX_HOURLY_WAGE", "120");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.limits.min_age, 21);
        assert_eq!(config.scoring.limits.max_hourly_wage, 120.0);
        assert_eq!(
            config.scoring.limits.max_age,
            ValidationLimits::default().max_age
        );
        reset_env();
    }

    #[test]
    fn malformed_numeric_variables_are_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MAPLE_PORT", "web");
        match AppConfig::load() {
            Err(ConfigError::InvalidValue { name }) => assert_eq!(name, "MAPLE_PORT"),
            other => panic!("expected invalid value, got {other:?}"),
        }
        reset_env();
    }
}
