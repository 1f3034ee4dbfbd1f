use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::scene::EngineConfig;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub policy: PolicyConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let path = env::var("EPICAL_POLICY_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            policy: PolicyConfig { path },
        })
    }

    /// Engine configuration from the policy file, or the built-in defaults when none is set.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        match &self.policy.path {
            Some(path) => Ok(load_policy_file(path)?),
            None => Ok(EngineConfig::default()),
        }
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where to find a city policy override. `None` keeps the built-in policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyLoadError {
    #[error("unable to read policy file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("policy file {path} is not a valid engine configuration: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read an [`EngineConfig`] from JSON. Keys left out of the file keep their defaults.
pub fn load_policy_file(path: &Path) -> Result<EngineConfig, PolicyLoadError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| PolicyLoadError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PolicyLoadError::Parse {
        path: display,
        source,
    })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    Policy(PolicyLoadError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::Policy(err) => write!(f, "EPICAL_POLICY_PATH: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::Policy(err) => Some(err),
        }
    }
}

impl From<PolicyLoadError> for ConfigError {
    fn from(value: PolicyLoadError) -> Self {
        Self::Policy(value)
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
        env::remove_var("EPICAL_POLICY_PATH");
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("epical-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write scratch policy");
        path
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.policy.path.is_none());
        assert_eq!(
            config.engine_config().expect("default policy"),
            EngineConfig::default()
        );
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        match AppConfig::load() {
            Err(ConfigError::InvalidPort) => {}
            other => panic!("expected invalid port, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn policy_file_overrides_only_named_keys() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = scratch_file(
            "partial.json",
            r#"{ "policy": { "speedLimitUrbanMph": 40, "minOfficersForHostage": 6 } }"#,
        );
        env::set_var("EPICAL_POLICY_PATH", &path);

        let config = AppConfig::load().expect("config loads");
        let engine = config.engine_config().expect("policy parses");
        assert_eq!(engine.policy.speed_limit_urban_mph, 40.0);
        assert_eq!(engine.policy.min_officers_for_hostage, 6);
        assert_eq!(engine.policy.speed_limit_motorway_mph, 100.0);
        assert_eq!(engine.weights, EngineConfig::default().weights);

        reset_env();
        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_policy_file_reports_parse_error() {
        let path = scratch_file("broken.json", "{ not json");
        match load_policy_file(&path) {
            Err(PolicyLoadError::Parse { path: reported, .. }) => {
                assert!(reported.ends_with("broken.json"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_policy_file_reports_read_error() {
        let path = env::temp_dir().join("epical-policy-that-does-not-exist.json");
        match load_policy_file(&path) {
            Err(PolicyLoadError::Read { .. }) => {}
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
