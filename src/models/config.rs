//! Configuration models loaded from external sources.
//!
//! Both configs read an optional YAML file and then `WEBDOM__`-prefixed
//! environment variables (`WEBDOM__BASE_URL`, `WEBDOM__PORT`, ...).

#[cfg(feature = "client")]
use std::path::PathBuf;
#[cfg(feature = "client")]
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "WEBDOM";

fn load<T: for<'de> Deserialize<'de>>(path: Option<&str>) -> Result<T, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path).required(false));
    }
    builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(feature = "client")]
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Settings of the admin console client.
pub struct ClientConfig {
    /// Root of the REST API; endpoint paths are joined onto it.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Pause between a 401 teardown and the redirect to the login screen.
    pub redirect_delay_ms: u64,
    /// Where the console sends users without a valid session.
    pub login_path: String,
    /// File backing durable client storage; `None` keeps it in memory.
    pub storage_path: Option<PathBuf>,
}

#[cfg(feature = "client")]
impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/".to_string(),
            timeout_secs: 10,
            redirect_delay_ms: 100,
            login_path: "/".to_string(),
            storage_path: None,
        }
    }
}

#[cfg(feature = "client")]
impl ClientConfig {
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        load(path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[cfg(feature = "server")]
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Settings of the mock admin API server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// HMAC secret for issued tokens; a random one is generated when empty.
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

#[cfg(feature = "server")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: String::new(),
            token_ttl_hours: 24,
        }
    }
}

#[cfg(feature = "server")]
impl ServerConfig {
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        load(path)
    }
}
