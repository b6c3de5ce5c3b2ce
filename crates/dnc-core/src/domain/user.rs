//! User Entity
//!
//! The signed-in user as returned in the login `udata` payload.

use serde::{Deserialize, Serialize};

/// Role tier, sent by the backend as `"1"`..`"4"`
///
/// Some backends send the tier as a bare number; both forms are accepted and
/// normalized to the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LevelRepr", into = "String")]
pub struct Level(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Text(String),
    Number(u64),
}

impl From<LevelRepr> for Level {
    fn from(repr: LevelRepr) -> Self {
        match repr {
            LevelRepr::Text(s) => Level(s.trim().to_string()),
            LevelRepr::Number(n) => Level(n.to_string()),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl Level {
    pub fn new(level: impl Into<String>) -> Self {
        Level(level.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Levels 3 and 4 see every menu group. Anything else, including
    /// unrecognized values, gets the restricted menu.
    pub fn has_full_menu(&self) -> bool {
        matches!(self.0.as_str(), "3" | "4")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login id
    pub user: String,
    pub level: Level,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(user: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            level: Level::new(level),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        }
    }

    /// "First Last", falling back to the login id
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.user.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_udata() {
        let user: User = serde_json::from_value(json!({
            "user": "ops",
            "level": "3",
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.level.as_str(), "3");
        assert!(user.level.has_full_menu());
        assert_eq!(user.display_name(), "Ada Byron");
    }

    #[test]
    fn test_numeric_level_accepted() {
        let user: User = serde_json::from_value(json!({ "user": "x", "level": 4 })).unwrap();
        assert_eq!(user.level, Level::new("4"));
        assert_eq!(user.display_name(), "x");
        assert_eq!(serde_json::to_value(&user.level).unwrap(), json!("4"));
    }

    #[test]
    fn test_restricted_levels() {
        for level in ["1", "2", "5", "", "admin"] {
            assert!(!Level::new(level).has_full_menu(), "level {:?}", level);
        }
    }
}
