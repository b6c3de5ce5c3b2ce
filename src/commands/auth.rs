//! Auth Commands
//!
//! `POST /login`.

use serde_json::Value;
use dnc_core::{interpret_login_response, LoginError, LoginRequest, Session};

use super::client;
use crate::settings::ClientSettings;

/// Sign in with username and password
pub async fn login_user(settings: &ClientSettings, uname: &str, pwd: &str) -> Result<Session, LoginError> {
    let request = LoginRequest::new(uname, pwd)?;

    let response = client()
        .post(settings.endpoint("login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| LoginError::Transport(e.to_string()))?;

    // Rejections arrive with an error status and a `{message}` body,
    // so the body is interpreted regardless of status.
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| LoginError::MalformedResponse(format!("HTTP {}: {}", status, e)))?;

    let outcome = interpret_login_response(body);
    match &outcome {
        Ok(session) => log::info!("login accepted for {}", session.user.user),
        Err(e) => log::warn!("login failed ({}): {}", status, e),
    }
    outcome
}
