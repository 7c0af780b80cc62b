use serde::{Deserialize, Serialize};

use crate::config::AutoDarkConfig;
use crate::state::theme::NightWindow;

/// Visitor preferences persisted as one JSON blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// UI click tones.
    pub sound: bool,
    pub animations: bool,
    /// Keep an unsent contact message across reloads.
    pub auto_save: bool,
    /// Force dark at night while following the system theme. `None` until
    /// the visitor chooses; the site config supplies the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_dark: Option<bool>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound: false,
            animations: true,
            auto_save: true,
            auto_dark: None,
        }
    }
}

impl Preferences {
    /// Parse a stored blob. Malformed JSON yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Fill an unset auto-dark choice with the site default.
    pub fn with_auto_dark_default(mut self, enabled: bool) -> Self {
        if self.auto_dark.is_none() {
            self.auto_dark = Some(enabled);
        }
        self
    }

    pub fn auto_dark_enabled(&self) -> bool {
        self.auto_dark == Some(true)
    }

    /// The nightly window the theme should honour, if auto-dark is on.
    pub fn night_window(&self, config: &AutoDarkConfig) -> Option<NightWindow> {
        self.auto_dark
            .unwrap_or(config.enabled)
            .then(|| NightWindow::from_config(config))
    }

    /// Animations run only if the visitor wants them and the OS does not
    /// ask for reduced motion.
    pub fn motion_enabled(&self, os_reduced_motion: bool) -> bool {
        self.animations && !os_reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.sound);
        assert!(prefs.animations);
        assert!(prefs.auto_save);
        assert_eq!(prefs.auto_dark, None);
    }

    #[test]
    fn test_malformed_json_is_default() {
        for raw in ["", "not json", "[1,2]", r#"{"sound": "yes"}"#] {
            assert_eq!(Preferences::from_json(raw), Preferences::default(), "raw: {}", raw);
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs = Preferences::from_json(r#"{"sound": true}"#);
        assert!(prefs.sound);
        assert!(prefs.animations);
        assert!(prefs.auto_save);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let prefs = Preferences::from_json(r#"{"animations": false, "volume": 11}"#);
        assert!(!prefs.animations);
    }

    #[test]
    fn test_auto_dark_default_fills_only_unset_choice() {
        assert!(Preferences::default().with_auto_dark_default(true).auto_dark_enabled());
        assert!(!Preferences::default().with_auto_dark_default(false).auto_dark_enabled());

        let opted_out = Preferences::from_json(r#"{"auto_dark": false}"#);
        assert!(!opted_out.with_auto_dark_default(true).auto_dark_enabled());
    }

    #[test]
    fn test_auto_dark_toggle_controls_night_window() {
        let config = AutoDarkConfig::default();
        let mut prefs = Preferences::default();
        assert_eq!(prefs.night_window(&config), None, "Config ships disabled");

        prefs.auto_dark = Some(true);
        assert_eq!(prefs.night_window(&config), Some(NightWindow::new(18, 6)));

        prefs.auto_dark = Some(false);
        let site_on = AutoDarkConfig {
            enabled: true,
            ..AutoDarkConfig::default()
        };
        assert_eq!(prefs.night_window(&site_on), None, "Visitor opt-out wins");
    }

    #[test]
    fn test_unset_auto_dark_is_not_written() {
        let json = serde_json::to_string(&Preferences::default()).expect("serialize");
        assert!(!json.contains("auto_dark"), "{}", json);

        let chosen = Preferences {
            auto_dark: Some(true),
            ..Preferences::default()
        };
        let json = serde_json::to_string(&chosen).expect("serialize");
        assert_eq!(Preferences::from_json(&json), chosen);
    }

    #[test]
    fn test_reduced_motion_overrides_animations() {
        let prefs = Preferences::default();
        assert!(prefs.motion_enabled(false));
        assert!(!prefs.motion_enabled(true));

        let off = Preferences {
            animations: false,
            ..Preferences::default()
        };
        assert!(!off.motion_enabled(false));
    }
}
