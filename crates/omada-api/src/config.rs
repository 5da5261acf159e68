// ── Controller configuration ──
//
// The YAML config file (`baseurl`, `site`, `verify`, `username`, `password`)
// layered over built-in defaults and `OMADA_*` environment variables, and its
// validated runtime form `ClientConfig`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use crate::auth::Credentials;
use crate::transport::TlsMode;

/// Environment variable prefix for config overrides (`OMADA_SITE`, ...).
pub const ENV_PREFIX: &str = "OMADA_";

/// Keys read from the environment verbatim, never parsed as numbers.
const RAW_ENV_KEYS: [&str; 2] = ["username", "password"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured (set `username` and `password`)")]
    NoCredentials,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── File config ─────────────────────────────────────────────────────

/// Contents of the YAML config file.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    /// Controller root URL, e.g. `https://omadacontroller.local:8043`.
    #[serde(default = "default_baseurl")]
    pub baseurl: String,

    /// Site key used by site-scoped calls.
    #[serde(default = "default_site", deserialize_with = "scalar_string")]
    pub site: String,

    /// Verify the controller's TLS certificate.
    #[serde(default = "default_verify")]
    pub verify: bool,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar_string_opt"
    )]
    pub username: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar_string_opt"
    )]
    pub password: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_baseurl() -> String {
    "https://omadacontroller.local:8043".into()
}
fn default_site() -> String {
    "Default".into()
}
fn default_verify() -> bool {
    true
}
fn default_timeout() -> u64 {
    30
}

/// A YAML scalar read as text: `password: 123456` is a number to the parser.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalar_string_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|v| v.map(String::from))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseurl: default_baseurl(),
            site: default_site(),
            verify: default_verify(),
            username: None,
            password: None,
            timeout: default_timeout(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("baseurl", &self.baseurl)
            .field("site", &self.site)
            .field("verify", &self.verify)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load the config file at `path`. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::figment(path).extract()?)
    }

    /// Load the config file at `path`, falling back to defaults (plus any
    /// `OMADA_*` overrides) when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(path.as_ref()).extract()?)
    }

    fn figment(path: &Path) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&RAW_ENV_KEYS));

        // Env parsing would turn `OMADA_PASSWORD=007` into the number 7.
        for key in RAW_ENV_KEYS {
            let var = format!("{ENV_PREFIX}{}", key.to_uppercase());
            if let Ok(value) = std::env::var(&var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        figment
    }

    /// Whether both username and password are present.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Fill in credentials obtained outside the config file.
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Validate and translate into the runtime `ClientConfig`.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base_url: Url = self.baseurl.parse().map_err(|_| ConfigError::Validation {
            field: "baseurl".into(),
            reason: format!("invalid URL: {}", self.baseurl),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "baseurl".into(),
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        if self.site.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "site".into(),
                reason: "must not be empty".into(),
            });
        }

        let (Some(username), Some(password)) = (&self.username, &self.password) else {
            return Err(ConfigError::NoCredentials);
        };

        Ok(ClientConfig {
            base_url,
            site: self.site.clone(),
            tls: TlsMode::from_verify(self.verify),
            timeout: Duration::from_secs(self.timeout),
            credentials: Credentials {
                username: username.clone(),
                password: SecretString::from(password.clone()),
            },
        })
    }
}

// ── Runtime config ──────────────────────────────────────────────────

/// Validated connection settings for a single controller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Controller root URL (without `/api/v2`).
    pub base_url: Url,
    /// Default site key for site-scoped calls.
    pub site: String,
    pub tls: TlsMode,
    pub timeout: Duration,
    pub credentials: Credentials,
}
