//! Login
//!
//! Request body and response interpretation for `POST /login`. A response
//! is either a session (token plus user record) or a typed failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error("malformed login response: {0}")]
    MalformedResponse(String),
    #[error("login request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub uname: &'a str,
    pub pwd: &'a str,
}

impl<'a> LoginRequest<'a> {
    /// Build a request; blank username or empty password is refused locally
    pub fn new(uname: &'a str, pwd: &'a str) -> Result<Self, LoginError> {
        let uname = uname.trim();
        if uname.is_empty() || pwd.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(Self { uname, pwd })
    }
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Interpret a `/login` response body.
///
/// `{token, udata}` is a session, `{message}` is a rejection carrying the
/// server's message, anything else is malformed.
pub fn interpret_login_response(body: Value) -> Result<Session, LoginError> {
    let Value::Object(mut fields) = body else {
        return Err(LoginError::MalformedResponse("expected a JSON object".to_string()));
    };

    match (fields.remove("token"), fields.remove("udata")) {
        (Some(Value::String(token)), Some(udata)) if !token.is_empty() => {
            let user: User = serde_json::from_value(udata)
                .map_err(|e| LoginError::MalformedResponse(format!("udata: {}", e)))?;
            Ok(Session { token, user })
        }
        (Some(_), _) if !fields.contains_key("message") => Err(LoginError::MalformedResponse(
            "token without a usable user record".to_string(),
        )),
        _ => match fields.remove("message") {
            Some(Value::String(message)) => Err(LoginError::Rejected(message)),
            Some(other) => Err(LoginError::Rejected(other.to_string())),
            None => Err(LoginError::MalformedResponse(
                "neither token nor message present".to_string(),
            )),
        },
    }
}
