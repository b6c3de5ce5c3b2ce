//! Customization Store
//!
//! Session state of the admin shell and the reducer that updates it.
//! Every action replaces exactly one field and yields a new state value.

use serde::{Deserialize, Serialize};

use crate::domain::{Config, ConfigError, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

pub const DEFAULT_FONT_FAMILY: &str = "'Roboto', sans-serif";
pub const DEFAULT_BORDER_RADIUS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Ids of the currently highlighted menu items
    pub is_open: Vec<String>,
    pub font_family: String,
    pub border_radius: u32,
    /// Sidebar drawer visible
    pub opened: bool,
    pub mode: ThemeMode,
    pub my_config: Option<Config>,
    pub my_user: Option<User>,
    pub my_token: Option<String>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            is_open: Vec::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            border_radius: DEFAULT_BORDER_RADIUS,
            opened: true,
            mode: ThemeMode::Light,
            my_config: None,
            my_user: None,
            my_token: None,
        }
    }
}

impl Customization {
    pub fn is_signed_in(&self) -> bool {
        self.my_token.is_some() && self.my_user.is_some()
    }
}

/// Store actions, tagged by `type` the way the dashboard dispatches them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetMyConfig {
        #[serde(rename = "myConfig")]
        config: Option<Config>,
    },
    SetMyUser {
        #[serde(rename = "myUser")]
        user: Option<User>,
    },
    SetMyToken {
        #[serde(rename = "myToken")]
        token: Option<String>,
    },
    SetMenu {
        opened: bool,
    },
    MenuOpen {
        id: String,
    },
    SetFontFamily {
        #[serde(rename = "fontFamily")]
        font_family: String,
    },
    SetBorderRadius {
        #[serde(rename = "borderRadius")]
        border_radius: u32,
    },
    SetThemeMode {
        mode: ThemeMode,
    },
    /// Any unrecognized `type`; leaves state untouched
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire name of the action type
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetMyConfig { .. } => "SET_MY_CONFIG",
            Action::SetMyUser { .. } => "SET_MY_USER",
            Action::SetMyToken { .. } => "SET_MY_TOKEN",
            Action::SetMenu { .. } => "SET_MENU",
            Action::MenuOpen { .. } => "MENU_OPEN",
            Action::SetFontFamily { .. } => "SET_FONT_FAMILY",
            Action::SetBorderRadius { .. } => "SET_BORDER_RADIUS",
            Action::SetThemeMode { .. } => "SET_THEME_MODE",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Apply one action to `state`, returning the next state
pub fn reduce(state: &Customization, action: Action) -> Customization {
    let mut next = state.clone();
    match action {
        Action::SetMyConfig { config } => next.my_config = config,
        Action::SetMyUser { user } => next.my_user = user,
        Action::SetMyToken { token } => next.my_token = token,
        Action::SetMenu { opened } => next.opened = opened,
        Action::MenuOpen { id } => next.is_open = vec![id],
        Action::SetFontFamily { font_family } => next.font_family = font_family,
        Action::SetBorderRadius { border_radius } => next.border_radius = border_radius,
        Action::SetThemeMode { mode } => next.mode = mode,
        Action::Unknown => {}
    }
    next
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Bookkeeping for config fetches
///
/// Each fetch takes a generation number. Only the response for the newest
/// generation is applied, so an older request resolving late cannot
/// overwrite a newer config, and nothing lands after `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigLoad {
    generation: u64,
    status: LoadStatus,
}

impl ConfigLoad {
    /// Start a fetch and return its generation
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Record the outcome of fetch `generation`.
    ///
    /// Returns `false` and changes nothing when the fetch is stale.
    pub fn finish<T>(&mut self, generation: u64, outcome: &Result<T, ConfigError>) -> bool {
        if !self.is_current(generation) {
            log::debug!(
                "discarding config response for generation {} (current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.status = match outcome {
            Ok(_) => LoadStatus::Ready,
            Err(e) => LoadStatus::Failed(e.to_string()),
        };
        true
    }

    /// Forget in-flight fetches (sign-out)
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = LoadStatus::Idle;
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_action_sets_one_field() {
        let state = Customization::default();

        let next = reduce(&state, Action::SetMyToken { token: Some("abc".into()) });
        assert_eq!(next.my_token.as_deref(), Some("abc"));
        assert_eq!(Customization { my_token: None, ..next.clone() }, state);

        let next = reduce(&state, Action::SetMyUser { user: Some(User::new("ops", "2")) });
        assert_eq!(next.my_user.as_ref().map(|u| u.user.as_str()), Some("ops"));
        assert_eq!(Customization { my_user: None, ..next }, state);

        let next = reduce(&state, Action::SetMyConfig { config: Some(Config::default()) });
        assert_eq!(next.my_config, Some(Config::default()));

        let next = reduce(&state, Action::SetMenu { opened: false });
        assert!(!next.opened);

        let next = reduce(&state, Action::SetFontFamily { font_family: "Inter".into() });
        assert_eq!(next.font_family, "Inter");

        let next = reduce(&state, Action::SetBorderRadius { border_radius: 4 });
        assert_eq!(next.border_radius, 4);

        let next = reduce(&state, Action::SetThemeMode { mode: ThemeMode::Dark });
        assert_eq!(next.mode, ThemeMode::Dark);
        assert_eq!(Customization { mode: ThemeMode::Light, ..next }, state);
    }

    #[test]
    fn test_menu_open_replaces_list() {
        let state = reduce(&Customization::default(), Action::MenuOpen { id: "users".into() });
        let state = reduce(&state, Action::MenuOpen { id: "spots".into() });
        assert_eq!(state.is_open, vec!["spots".to_string()]);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let state = Customization::default();
        let snapshot = state.clone();
        let _ = reduce(&state, Action::SetMenu { opened: false });
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let action: Action = serde_json::from_value(json!({ "type": "SET_SOMETHING_ELSE" })).unwrap();
        assert_eq!(action, Action::Unknown);

        let state = reduce(&Customization::default(), Action::SetMenu { opened: false });
        assert_eq!(reduce(&state, action), state);
    }

    #[test]
    fn test_action_wire_names() {
        let action: Action = serde_json::from_value(json!({
            "type": "SET_BORDER_RADIUS",
            "borderRadius": 8
        }))
        .unwrap();
        assert_eq!(action, Action::SetBorderRadius { border_radius: 8 });

        let action: Action = serde_json::from_value(json!({ "type": "MENU_OPEN", "id": "device" })).unwrap();
        assert_eq!(action, Action::MenuOpen { id: "device".into() });
    }

    #[test]
    fn test_signed_in_requires_token_and_user() {
        let state = reduce(&Customization::default(), Action::SetMyToken { token: Some("t".into()) });
        assert!(!state.is_signed_in());
        let state = reduce(&state, Action::SetMyUser { user: Some(User::new("u", "1")) });
        assert!(state.is_signed_in());
    }

    #[test]
    fn test_theme_name_matches_wire_value() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.as_str()));
        }
        assert_eq!(ThemeMode::Light.toggled().as_str(), "dark");
    }

    #[test]
    fn test_stale_config_generation_rejected() {
        let mut load = ConfigLoad::default();
        let first = load.begin();
        let second = load.begin();

        let ok: Result<(), ConfigError> = Ok(());
        assert!(!load.finish(first, &ok));
        assert_eq!(load.status(), &LoadStatus::Loading);

        assert!(load.finish(second, &ok));
        assert_eq!(load.status(), &LoadStatus::Ready);
    }

    #[test]
    fn test_failed_load_keeps_reason() {
        let mut load = ConfigLoad::default();
        let generation = load.begin();
        let outcome: Result<(), ConfigError> = Err(ConfigError::Incomplete { missing: vec!["plugins"] });
        assert!(load.finish(generation, &outcome));
        assert_eq!(
            load.status(),
            &LoadStatus::Failed("config incomplete, missing: plugins".to_string())
        );
    }

    #[test]
    fn test_reset_discards_in_flight() {
        let mut load = ConfigLoad::default();
        let generation = load.begin();
        load.reset();
        assert!(!load.finish(generation, &Ok::<(), ConfigError>(())));
        assert_eq!(load.status(), &LoadStatus::Idle);
    }
}
