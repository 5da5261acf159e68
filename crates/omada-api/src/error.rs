use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for the `omada-api` crate.
///
/// Authentication failures, missing sessions, and the request errors
/// (transport, HTTP status, envelope, body decoding) are kept apart so
/// callers can react to each without string matching.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed: rejected credentials or unreachable login endpoint.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// An accessor was called before a successful `login()`.
    #[error("Not authenticated -- call login() first")]
    NotAuthenticated,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup failed while building the HTTP client.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request ─────────────────────────────────────────────────────
    /// Controller answered with a non-success HTTP status.
    #[error("Request failed (HTTP {status}): {body}")]
    Request { status: u16, body: String },

    /// Controller answered 2xx but the envelope carried a non-zero `errorCode`.
    #[error("Omada API error {code}: {message}")]
    Api { code: i64, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Configuration ───────────────────────────────────────────────
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns `true` for the request-error family: transport failures,
    /// non-2xx statuses, API error codes, and unparseable bodies.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::Request { .. }
                | Self::Api { .. }
                | Self::Deserialization { .. }
        )
    }

    /// Returns `true` if a fresh `login()` might resolve this error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::NotAuthenticated)
    }

    /// HTTP status code, when the controller returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
