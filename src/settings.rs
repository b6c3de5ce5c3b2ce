//! Client Settings
//!
//! Where the DNC backend lives. Read at build time from `DNC_URL`.

const DEFAULT_DNC_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Backend base URL, no trailing slash
    pub dnc_url: String,
}

impl ClientSettings {
    pub fn from_build_env() -> Self {
        Self::with_url(option_env!("DNC_URL").unwrap_or(DEFAULT_DNC_URL))
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            dnc_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of a backend endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.dnc_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::with_url(DEFAULT_DNC_URL)
    }
}
