//! Configuration for the storefront server.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `storefront.yaml` in the working directory (if present)
//! 3. The file named by `STOREFRONT_CONFIG` (if set; must exist)
//! 4. `STOREFRONT__<SECTION>__<KEY>` environment variables
//! 5. `PORT`, for hosts that assign the listen port

use std::time::Duration;

use serde::Deserialize;

use crate::auth::AdminSeed;
use crate::checkout::CheckoutMode;

pub const CONFIG_ENV_VAR: &str = "STOREFRONT_CONFIG";
pub const CONFIG_ENV_PREFIX: &str = "STOREFRONT";
pub const DEFAULT_CONFIG_FILE: &str = "storefront";
pub const DEV_TOKEN_SECRET: &str = "storefront-dev-secret";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub checkout: CheckoutConfig,
    pub seed: SeedConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC key for bearer tokens.
    pub token_secret: String,
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEV_TOKEN_SECRET.to_string(),
            token_ttl_secs: 3600,
        }
    }
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Reject the whole cart when any line cannot be decremented.
    pub strict: bool,
}

impl CheckoutConfig {
    pub fn mode(&self) -> CheckoutMode {
        if self.strict {
            CheckoutMode::Strict
        } else {
            CheckoutMode::Lenient
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the demo catalog at startup.
    pub catalog: bool,
    /// Create this administrator at startup if missing.
    pub admin: Option<AdminSeed>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            catalog: true,
            admin: Some(AdminSeed::default()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        let config: Config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document on top of the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, File, FileFormat};

        let config: Config = ConfigLib::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("auth.token_secret must not be empty".into()));
        }
        if self.auth.token_ttl_secs == 0 {
            return Err(ConfigError::Invalid("auth.token_ttl_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.auth.token_secret == DEV_TOKEN_SECRET
    }
}
