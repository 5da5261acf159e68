// Omada API HTTP client
//
// Wraps `reqwest::Client` with `/api/v2` URL construction, session token
// handling, and envelope unwrapping. Endpoint groups (auth, devices, sites)
// are inherent methods in their own files; this module only carries the
// transport mechanics.

use std::path::Path;
use std::sync::RwLock;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::config::{ClientConfig, Config};
use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// Path prefix of the controller's web API.
pub const API_PREFIX: &str = "/api/v2";

/// Client for a single Omada controller.
///
/// Holds the configuration and the session token obtained by
/// [`login`](Self::login). Accessors return the envelope's `result`
/// payload; the envelope itself never reaches the caller.
pub struct OmadaClient {
    http: reqwest::Client,
    base_url: Url,
    site: String,
    credentials: Credentials,
    /// Session token from the last successful login. Sent as the `token`
    /// query parameter on every authenticated request.
    token: RwLock<Option<String>>,
}

impl OmadaClient {
    /// Create a client from a validated `ClientConfig`.
    ///
    /// The HTTP client gets its own cookie jar: the controller pairs the
    /// token with a session cookie set at login.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = TransportConfig {
            tls: config.tls,
            timeout: config.timeout,
            cookie_jar: None,
        }
        .with_cookie_jar();
        let http = transport.build_client()?;

        debug!(
            base_url = %config.base_url,
            site = %config.site,
            verify = config.tls.verifies(),
            "created omada client"
        );

        Ok(Self::with_client(
            http,
            config.base_url,
            config.site,
            config.credentials,
        ))
    }

    /// Create a client from the YAML config file at `path`.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = Config::load(path)?;
        Self::new(config.to_client_config()?)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        site: String,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            base_url,
            site,
            credentials,
            token: RwLock::new(None),
        }
    }

    /// The configured site key.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Session token ────────────────────────────────────────────────

    /// The current session token, if logged in.
    pub fn session_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    pub(crate) fn set_token(&self, token: String) {
        trace!("storing session token");
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    pub(crate) fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    fn require_token(&self) -> Result<String, Error> {
        self.session_token().ok_or(Error::NotAuthenticated)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/v2{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}{API_PREFIX}{path}",
            self.base_url.as_str().trim_end_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    /// Build a site-scoped URL: `{base}/api/v2/sites/{site}{path}`.
    pub(crate) fn site_url(&self, site: &str, path: &str) -> Result<Url, Error> {
        self.api_url(&format!("/sites/{site}{path}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Attach the session token and the `_` cache-buster timestamp.
    pub(crate) fn authenticated(&self, method: Method, url: Url) -> Result<RequestBuilder, Error> {
        let token = self.require_token()?;
        debug!("{method} {url}");
        let stamp = chrono::Utc::now().timestamp_millis();
        Ok(self
            .http
            .request(method, url)
            .query(&[("token", token), ("_", stamp.to_string())]))
    }

    /// Send an authenticated GET and return the envelope's `result`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let resp = self
            .authenticated(Method::GET, url)?
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_envelope::<T>(resp)
            .await?
            .ok_or_else(|| Error::Deserialization {
                message: "response has no `result`".into(),
                body: String::new(),
            })
    }

    /// Send an authenticated PATCH with a JSON body. A missing `result`
    /// comes back as `Value::Null`.
    pub(crate) async fn patch(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<serde_json::Value, Error> {
        let resp = self
            .authenticated(Method::PATCH, url)?
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Ok(Self::parse_envelope(resp).await?.unwrap_or_default())
    }

    /// Check the HTTP status, parse the `{ errorCode, msg, result }`
    /// envelope, and return `result` when `errorCode == 0`.
    pub(crate) async fn parse_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: format!("session rejected (HTTP {status})"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Request {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if envelope.error_code != 0 {
            return Err(Error::Api {
                code: envelope.error_code,
                message: envelope
                    .msg
                    .unwrap_or_else(|| format!("errorCode={}", envelope.error_code)),
            });
        }

        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::transport::TlsMode;

    fn client(base: &str) -> OmadaClient {
        OmadaClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).expect("valid URL"),
            "Default".into(),
            Credentials {
                username: "admin".into(),
                password: SecretString::from("pw".to_string()),
            },
        )
    }

    #[test]
    fn builds_api_and_site_urls() {
        let c = client("https://omada.local:8043/");
        assert_eq!(
            c.api_url("/login").expect("url").as_str(),
            "https://omada.local:8043/api/v2/login"
        );
        assert_eq!(
            c.site_url("Default", "/devices").expect("url").as_str(),
            "https://omada.local:8043/api/v2/sites/Default/devices"
        );
    }

    #[test]
    fn unverified_config_builds_insecure_client() {
        let config = Config {
            verify: false,
            ..Config::default()
        }
        .with_credentials("admin", "pw")
        .to_client_config()
        .expect("valid config");
        assert_eq!(config.tls, TlsMode::DangerAcceptInvalid);

        let client = OmadaClient::new(config).expect("client builds");
        assert_eq!(client.site(), "Default");
        assert!(client.session_token().is_none());
    }

    #[test]
    fn token_lifecycle() {
        let c = client("https://omada.local:8043");
        assert!(c.session_token().is_none());
        assert!(matches!(c.require_token(), Err(Error::NotAuthenticated)));

        c.set_token("abc".into());
        assert_eq!(c.session_token().as_deref(), Some("abc"));

        c.clear_token();
        assert!(c.session_token().is_none());
    }
}
