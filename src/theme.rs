//! Theme store: owns the [`ThemeResolver`] for the page and keeps the
//! document, `localStorage` and OS subscriptions in step with it.

use std::cell::RefCell;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use log::{debug, warn};

use crate::config::SiteConfig;
use crate::platform::{clock, dom, media};
use crate::preferences::PreferencesContext;
use crate::state::theme::{Appearance, NightWindow, ThemeMode, ThemeResolver};
use crate::storage::{self, BrowserStorage};

const TRANSITION_CLASS: &str = "theme-transition";

thread_local! {
    static TRANSITION: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    resolver: RwSignal<ThemeResolver>,
    appearance: Memo<Appearance>,
    storage_key: StoredValue<String>,
    transition_ms: u32,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.resolver.with(|r| r.mode())
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance.get()
    }

    /// Switch modes, persist the choice and mask the flip with a short
    /// transition class. Setting the current mode again does nothing.
    pub fn set_mode(&self, mode: ThemeMode) {
        if self.resolver.with_untracked(|r| r.mode()) == mode {
            return;
        }
        self.resolver.update(|r| {
            r.set_mode(mode);
        });
        debug!("Theme mode -> {}", mode);

        let key = self.storage_key.get_value();
        if let Err(e) = storage::save_theme_mode(&BrowserStorage::local(), &key, mode) {
            warn!("Failed to persist theme mode: {}", e);
        }
        start_transition(self.transition_ms);
    }
}

/// Apply the resolved appearance to `<html>`: `data-theme` for CSS
/// selectors and a `dark` class for utility styles.
pub fn apply_appearance(appearance: Appearance) {
    dom::set_root_attribute("data-theme", appearance.as_str());
    dom::set_root_class("dark", appearance.is_dark());
}

fn start_transition(duration_ms: u32) {
    if duration_ms == 0 {
        return;
    }
    dom::set_root_class(TRANSITION_CLASS, true);
    let timeout = Timeout::new(duration_ms, || dom::set_root_class(TRANSITION_CLASS, false));
    // Replacing a pending timeout cancels it; the newest switch owns the class.
    TRANSITION.with(|slot| *slot.borrow_mut() = Some(timeout));
}

/// Create the theme store for the current owner and provide it as context.
///
/// Subscriptions (OS color scheme, nightly clock) are held by the owner and
/// released when it is cleaned up. The nightly override follows the
/// visitor's auto-dark preference.
pub fn provide_theme(config: &SiteConfig, prefs: PreferencesContext) -> ThemeContext {
    let key = config.storage.theme_key.clone();
    let mode = storage::load_theme_mode(&BrowserStorage::local(), &key);
    let auto_dark = config.theme.auto_dark.clone();
    let night = prefs.prefs.with_untracked(|p| p.night_window(&auto_dark));
    let hour = night.map(|_| clock::local_hour());

    let resolver = RwSignal::new(
        ThemeResolver::new(mode)
            .with_os_preference(media::prefers_dark())
            .with_night_window(night, hour),
    );
    let appearance = Memo::new(move |_| resolver.with(|r| r.appearance()));

    let ctx = ThemeContext {
        resolver,
        appearance,
        storage_key: StoredValue::new(key),
        transition_ms: config.theme.transition_ms,
    };
    provide_context(ctx);

    Effect::new(move |_| {
        let applied = appearance.get();
        debug!("Appearance -> {}", applied.as_str());
        apply_appearance(applied);
    });

    // OS color scheme: subscribed only while the mode is `system`
    let watches_os = Memo::new(move |_| resolver.with(|r| r.watches_os()));
    let os_listener = StoredValue::new_local(None);
    Effect::new(move |_| {
        if !watches_os.get() {
            os_listener.set_value(None);
            return;
        }
        if let Some(dark) = media::prefers_dark() {
            resolver.update(|r| r.set_os_preference(dark));
        }
        match media::watch(media::PREFERS_DARK, move |dark| {
            debug!("OS prefers dark: {}", dark);
            resolver.update(|r| r.set_os_preference(dark));
        }) {
            Ok(listener) => os_listener.set_value(Some(listener)),
            Err(e) => debug!("Not following OS color scheme: {}", e),
        }
    });

    let wanted_night: Memo<Option<NightWindow>> =
        Memo::new(move |_| prefs.prefs.with(|p| p.night_window(&auto_dark)));
    Effect::new(move |_| {
        let night = wanted_night.get();
        if resolver.with_untracked(|r| r.night_window()) == night {
            return;
        }
        debug!("Auto-dark {}", if night.is_some() { "on" } else { "off" });
        resolver.update(|r| {
            r.set_night_window(night);
        });
    });

    // Nightly window: sampled on an interval while the mode is `system`
    let watches_clock = Memo::new(move |_| resolver.with(|r| r.watches_clock()));
    let clock_interval = StoredValue::new_local(None);
    let interval_ms = config.theme.auto_dark.check_interval_secs.max(1) * 1000;
    Effect::new(move |_| {
        if !watches_clock.get() {
            clock_interval.set_value(None);
            return;
        }
        resolver.update(|r| r.set_hour(clock::local_hour()));
        let interval = Interval::new(interval_ms, move || {
            resolver.update(|r| r.set_hour(clock::local_hour()));
        });
        clock_interval.set_value(Some(interval));
    });

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
