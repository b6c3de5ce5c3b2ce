//! Server Config
//!
//! Feature flags, per-organization aliases and plugin switches served by
//! `GET /cfgall`. Validated once at the fetch boundary so every consumer can
//! index the sub-maps without further checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Top-level keys a usable config must carry.
pub const REQUIRED_KEYS: [&str; 3] = ["features", "alias", "plugins"];

/// Session-scoped, read-only config snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Feature name -> enabled
    pub features: BTreeMap<String, bool>,
    /// Menu item id -> display name override
    pub alias: BTreeMap<String, String>,
    /// Plugin menu id -> enabled
    pub plugins: BTreeMap<String, bool>,
    /// Option lists for form selects, passed through untouched.
    /// Absent or `null` decodes to an empty map.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub autooptions: BTreeMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("config incomplete, missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
    #[error("config is not a JSON object")]
    NotAnObject,
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("config request failed: {0}")]
    Transport(String),
}

impl Config {
    /// Validate a raw `/cfgall` body.
    ///
    /// A key that is absent or `null` counts as missing. Every missing key is
    /// reported, not just the first.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| object.get(*key).map_or(true, Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Incomplete { missing });
        }

        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Feature flag value, `None` when the backend does not mention it
    pub fn feature(&self, name: &str) -> Option<bool> {
        self.features.get(name).copied()
    }

    pub fn alias_for(&self, id: &str) -> Option<&str> {
        self.alias.get(id).map(String::as_str)
    }

    /// Only an explicit `true` enables a plugin
    pub fn plugin_enabled(&self, id: &str) -> bool {
        self.plugins.get(id).copied().unwrap_or(false)
    }
}
