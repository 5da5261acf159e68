// Session login/logout
//
// `POST /api/v2/login` returns `result.token`; the client keeps it and sends
// it with every later request. The controller also sets a session cookie,
// which lives in the client's cookie jar.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::client::OmadaClient;
use crate::error::Error;
use crate::models::LoginResult;

/// Username/password pair for the controller's local admin login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl OmadaClient {
    /// Authenticate with the configured credentials and store the session
    /// token.
    ///
    /// Every failure, including an unreachable controller, is reported as
    /// [`Error::Authentication`].
    pub async fn login(&self) -> Result<String, Error> {
        let url = self.api_url("/login")?;
        debug!("logging in at {}", url);

        let body = json!({
            "username": self.credentials().username,
            "password": self.credentials().password.expose_secret(),
        });

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("login endpoint unreachable: {e}"),
            })?;

        let result = Self::parse_envelope::<LoginResult>(resp)
            .await
            .map_err(|e| match e {
                Error::Authentication { .. } => e,
                Error::Request { status, body } => Error::Authentication {
                    message: format!("login failed (HTTP {status}): {body}"),
                },
                Error::Api { code, message } => Error::Authentication {
                    message: format!("login rejected ({code}): {message}"),
                },
                other => Error::Authentication {
                    message: other.to_string(),
                },
            })?
            .ok_or_else(|| Error::Authentication {
                message: "login response carried no token".into(),
            })?;

        self.set_token(result.token.clone());
        debug!("login successful");
        Ok(result.token)
    }

    /// End the session.
    ///
    /// The session is dropped locally whatever the controller answers; a
    /// non-200 status is only logged.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("/logout")?;
        debug!("logging out at {}", url);

        let resp = self.http().post(url).send().await;
        self.clear_token();

        let status = resp.map_err(Error::Transport)?.status();
        if status == reqwest::StatusCode::OK {
            info!("logged out");
        } else {
            warn!(status = status.as_u16(), "logout failed");
        }
        Ok(())
    }

    /// Ask the controller whether the current session is still valid.
    ///
    /// `GET /api/v2/loginStatus`. Without a session this is `false` and no
    /// request is made.
    pub async fn is_logged_in(&self) -> Result<bool, Error> {
        if self.session_token().is_none() {
            return Ok(false);
        }
        let url = self.api_url("/loginStatus")?;

        let resp = self
            .authenticated(Method::GET, url)?
            .send()
            .await
            .map_err(Error::Transport)?;

        Ok(resp.status() == reqwest::StatusCode::OK)
    }
}
