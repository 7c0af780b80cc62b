//! Site configuration loaded from the TOML file embedded at compile time.
//!
//! Every field carries a serde default, so a partial file (or an empty one)
//! still produces a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Configuration compiled into the bundle from `config/site.toml`.
const EMBEDDED_CONFIG: &str = include_str!("../config/site.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub contact: ContactConfig,
    pub avatar: AvatarConfig,
    pub navigation: Vec<NavigationItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub theme_key: String,
    pub preferences_key: String,
    pub avatar_key: String,
    pub draft_key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// How long the `theme-transition` class stays on `<html>` after a switch.
    pub transition_ms: u32,
    pub auto_dark: AutoDarkConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoDarkConfig {
    pub enabled: bool,
    pub start_hour: u32,
    pub end_hour: u32,
    pub check_interval_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels added to the scroll position before matching sections,
    /// compensating for the fixed navigation bar.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub success_reset_secs: u32,
    pub recipient_email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub max_bytes: u64,
}

/// A static navigation entry. `href` points at a section anchor (`#about`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationItem {
    pub name: String,
    pub href: String,
}

impl NavigationItem {
    /// Section id targeted by this entry, without the leading `#`.
    pub fn section_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage: StorageConfig::default(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            contact: ContactConfig::default(),
            avatar: AvatarConfig::default(),
            navigation: Vec::new(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: "portfolio-theme".to_string(),
            preferences_key: "portfolio-preferences".to_string(),
            avatar_key: "portfolio-avatar".to_string(),
            draft_key: "portfolio-contact-draft".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            auto_dark: AutoDarkConfig::default(),
        }
    }
}

impl Default for AutoDarkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_hour: 18,
            end_hour: 6,
            check_interval_secs: 60,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { offset: 100.0 }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            success_reset_secs: 7,
            recipient_email: String::new(),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self { max_bytes: 2 * 1024 * 1024 }
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, PortfolioError> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration embedded in the bundle.
    ///
    /// # Panics
    /// Panics if the embedded TOML is invalid (a build-time bug).
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED_CONFIG).expect("embedded site.toml must be valid TOML")
    }

    /// Section ids in navigation order.
    pub fn section_ids(&self) -> Vec<String> {
        self.navigation
            .iter()
            .map(|item| item.section_id().to_string())
            .collect()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
