//! Durable key/value storage for visitor preferences.
//!
//! Reads never fail: a missing, unavailable or malformed entry is treated as
//! absent and callers get their default. Writes report errors so the caller
//! can log them.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use log::{debug, warn};

use crate::error::PortfolioError;
use crate::state::contact::ContactForm;
use crate::state::preferences::Preferences;
use crate::state::theme::ThemeMode;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError>;
    fn remove(&self, key: &str) -> Result<(), PortfolioError>;
}

/// `window.localStorage`, or nothing when the browser denies access
/// (private mode, disabled storage, no window).
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            debug!("localStorage unavailable; preferences will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        let storage = self
            .inner
            .as_ref()
            .ok_or(PortfolioError::Unavailable("localStorage"))?;
        storage
            .set_item(key, value)
            .map_err(|e| PortfolioError::storage(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), PortfolioError> {
        let storage = self
            .inner
            .as_ref()
            .ok_or(PortfolioError::Unavailable("localStorage"))?;
        storage
            .remove_item(key)
            .map_err(|e| PortfolioError::js("localStorage.removeItem", e))
    }
}

/// In-process store for host tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortfolioError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// -- Typed accessors --

/// The persisted theme mode, or `system` when absent or malformed.
pub fn load_theme_mode(store: &impl KeyValueStore, key: &str) -> ThemeMode {
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            debug!("Ignoring stored theme: {}", e);
            ThemeMode::System
        }),
        None => ThemeMode::System,
    }
}

/// Persist a theme mode. `system` is the implicit default, so the key is
/// removed rather than written.
pub fn save_theme_mode(
    store: &impl KeyValueStore,
    key: &str,
    mode: ThemeMode,
) -> Result<(), PortfolioError> {
    match mode {
        ThemeMode::System => store.remove(key),
        explicit => store.set(key, explicit.as_str()),
    }
}

pub fn load_preferences(store: &impl KeyValueStore, key: &str) -> Preferences {
    store
        .get(key)
        .map(|raw| Preferences::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_preferences(
    store: &impl KeyValueStore,
    key: &str,
    prefs: &Preferences,
) -> Result<(), PortfolioError> {
    store.set(key, &serde_json::to_string(prefs)?)
}

pub fn load_draft(store: &impl KeyValueStore, key: &str) -> Option<ContactForm> {
    let raw = store.get(key)?;
    match serde_json::from_str::<ContactForm>(&raw) {
        Ok(draft) if !draft.is_blank() => Some(draft),
        Ok(_) => None,
        Err(e) => {
            warn!("Discarding unreadable contact draft: {}", e);
            None
        }
    }
}

/// Persist the draft, or clear it once every field is blank.
pub fn save_draft(
    store: &impl KeyValueStore,
    key: &str,
    draft: &ContactForm,
) -> Result<(), PortfolioError> {
    if draft.is_blank() {
        store.remove(key)
    } else {
        store.set(key, &serde_json::to_string(draft)?)
    }
}

/// Cached avatar data URL. Anything that is not an image data URL is ignored.
pub fn load_avatar(store: &impl KeyValueStore, key: &str) -> Option<String> {
    store
        .get(key)
        .filter(|raw| raw.starts_with("data:image/") && raw.contains(";base64,"))
}

pub fn save_avatar(
    store: &impl KeyValueStore,
    key: &str,
    data_url: &str,
) -> Result<(), PortfolioError> {
    store.set(key, data_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "portfolio-theme";

    #[test]
    fn test_missing_theme_is_system() {
        let store = MemoryStorage::new();
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::System);
    }

    #[test]
    fn test_malformed_theme_is_system() {
        let store = MemoryStorage::new();
        for raw in ["", "purple", "{\"mode\":\"dark\"}", "darkest", "null"] {
            store.set(KEY, raw).unwrap();
            assert_eq!(load_theme_mode(&store, KEY), ThemeMode::System, "raw: {:?}", raw);
        }
    }

    #[test]
    fn test_theme_roundtrip_for_explicit_modes() {
        let store = MemoryStorage::new();
        save_theme_mode(&store, KEY, ThemeMode::Dark).unwrap();
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::Dark);

        save_theme_mode(&store, KEY, ThemeMode::Light).unwrap();
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::Light);
    }

    #[test]
    fn test_system_mode_is_not_stored() {
        let store = MemoryStorage::new();
        save_theme_mode(&store, KEY, ThemeMode::Dark).unwrap();
        save_theme_mode(&store, KEY, ThemeMode::System).unwrap();
        assert_eq!(store.get(KEY), None, "System clears any earlier explicit choice");
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::System);
    }

    #[test]
    fn test_preferences_roundtrip_and_fallback() {
        let store = MemoryStorage::new();
        assert_eq!(load_preferences(&store, "prefs"), Preferences::default());

        let prefs = Preferences {
            sound: true,
            animations: false,
            auto_save: false,
            auto_dark: Some(true),
        };
        save_preferences(&store, "prefs", &prefs).unwrap();
        assert_eq!(load_preferences(&store, "prefs"), prefs);

        store.set("prefs", "{broken").unwrap();
        assert_eq!(load_preferences(&store, "prefs"), Preferences::default());
    }

    #[test]
    fn test_draft_roundtrip_and_clear() {
        let store = MemoryStorage::new();
        let draft = ContactForm {
            name: "Ada".into(),
            email: String::new(),
            message: "Half written".into(),
        };
        save_draft(&store, "draft", &draft).unwrap();
        assert_eq!(load_draft(&store, "draft"), Some(draft));

        save_draft(&store, "draft", &ContactForm::default()).unwrap();
        assert_eq!(store.get("draft"), None);
        assert_eq!(load_draft(&store, "draft"), None);
    }

    #[test]
    fn test_malformed_draft_is_ignored() {
        let store = MemoryStorage::new();
        store.set("draft", "[not a form").unwrap();
        assert_eq!(load_draft(&store, "draft"), None);
    }

    #[test]
    fn test_avatar_requires_image_data_url() {
        let store = MemoryStorage::new();
        assert_eq!(load_avatar(&store, "avatar"), None);

        store.set("avatar", "https://example.com/me.png").unwrap();
        assert_eq!(load_avatar(&store, "avatar"), None);

        let url = "data:image/png;base64,iVBORw0KGgo=";
        save_avatar(&store, "avatar", url).unwrap();
        assert_eq!(load_avatar(&store, "avatar").as_deref(), Some(url));
    }
}
