//! Config Commands
//!
//! `GET /cfgall`, validated before it reaches the store.

use serde_json::Value;
use dnc_core::{Config, ConfigError};

use super::client;
use crate::settings::ClientSettings;

pub async fn fetch_config(settings: &ClientSettings, token: &str) -> Result<Config, ConfigError> {
    let response = client()
        .get(settings.endpoint("cfgall"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ConfigError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConfigError::Transport(format!("HTTP {}", status)));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Config::from_value(body)
}
