//! CLI error types with miette diagnostics.
//!
//! Maps `omada_api::Error` variants into user-facing errors with actionable
//! help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use omada_api::{ConfigError, Error as ApiError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the controller")]
    #[diagnostic(
        code(omada::connection_failed),
        help(
            "Check that `baseurl` in your config points at a running controller.\n\
             Self-signed certificate? Set `verify: false` or pass --insecure (-k)."
        )
    )]
    ConnectionFailed {
        #[source]
        source: ApiError,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(omada::auth_failed),
        help("Verify `username` and `password` in your config file.")
    )]
    AuthFailed { message: String },

    #[error("No credentials configured")]
    #[diagnostic(
        code(omada::no_credentials),
        help(
            "Add `username` and `password` to the config file,\n\
             or set OMADA_USERNAME and OMADA_PASSWORD."
        )
    )]
    NoCredentials,

    // ── API ──────────────────────────────────────────────────────────

    #[error("Controller returned error {code}: {message}")]
    #[diagnostic(code(omada::api_error))]
    Api { code: i64, message: String },

    #[error("Request failed with HTTP {status}")]
    #[diagnostic(code(omada::request_failed), help("Response body: {body}"))]
    Request { status: u16, body: String },

    #[error("Unexpected response from controller: {message}")]
    #[diagnostic(
        code(omada::bad_response),
        help("The controller firmware may use a different API version.")
    )]
    BadResponse { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(
        code(omada::no_config),
        help(
            "Create a YAML file with baseurl, site, verify, username, password.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(omada::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(omada::config))]
    Config(ConfigError),

    // ── IO / Interactive ──────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    #[diagnostic(code(omada::prompt))]
    Prompt(#[from] dialoguer::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Config / API error mapping ───────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } => CliError::NoConfig {
                path: path.display().to_string(),
            },
            ConfigError::NoCredentials => CliError::NoCredentials,
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other @ ConfigError::Figment(_) => CliError::Config(other),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Authentication { message } => CliError::AuthFailed { message },
            ApiError::NotAuthenticated => CliError::AuthFailed {
                message: "no active session".into(),
            },
            ApiError::Request { status, body } => CliError::Request { status, body },
            ApiError::Api { code, message } => CliError::Api { code, message },
            ApiError::Deserialization { message, .. } => CliError::BadResponse { message },
            ApiError::Config(config) => config.into(),
            other @ (ApiError::Transport(_) | ApiError::InvalidUrl(_) | ApiError::Tls(_)) => {
                CliError::ConnectionFailed { source: other }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_exit_with_auth_code() {
        let err: CliError = ApiError::Authentication {
            message: "bad password".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::AUTH);

        let err: CliError = ApiError::NotAuthenticated.into();
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn config_errors_map_to_usage() {
        let err: CliError = ConfigError::NotFound {
            path: "missing.yml".into(),
        }
        .into();
        assert!(matches!(err, CliError::NoConfig { ref path } if path == "missing.yml"));
        assert_eq!(err.exit_code(), exit_code::USAGE);

        let err: CliError = ApiError::Config(ConfigError::NoCredentials).into();
        assert!(matches!(err, CliError::NoCredentials));
    }

    #[test]
    fn request_errors_keep_status() {
        let err: CliError = ApiError::Request {
            status: 502,
            body: "Bad Gateway".into(),
        }
        .into();
        assert!(matches!(err, CliError::Request { status: 502, .. }));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }
}
