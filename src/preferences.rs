use leptos::prelude::*;
use log::warn;

use crate::config::SiteConfig;
use crate::platform::{dom, media};
use crate::state::preferences::Preferences;
use crate::storage::{self, BrowserStorage};

#[derive(Clone, Copy)]
pub struct PreferencesContext {
    pub prefs: RwSignal<Preferences>,
    reduced_motion: ReadSignal<bool>,
}

impl PreferencesContext {
    pub fn get(&self) -> Preferences {
        self.prefs.get()
    }

    pub fn update(&self, f: impl FnOnce(&mut Preferences)) {
        self.prefs.update(f);
    }

    pub fn motion_enabled(&self) -> bool {
        self.prefs.with(|p| p.motion_enabled(self.reduced_motion.get()))
    }

    pub fn sound_enabled(&self) -> bool {
        self.prefs.with_untracked(|p| p.sound)
    }
}

pub fn provide_preferences(config: &SiteConfig) -> PreferencesContext {
    let key = config.storage.preferences_key.clone();
    let stored = storage::load_preferences(&BrowserStorage::local(), &key)
        .with_auto_dark_default(config.theme.auto_dark.enabled);
    let prefs = RwSignal::new(stored);

    let (reduced_motion, set_reduced_motion) = signal(media::prefers_reduced_motion());
    // Owned by the reactive owner; dropped (and unsubscribed) on cleanup
    let _motion_listener = StoredValue::new_local(
        media::watch(media::PREFERS_REDUCED_MOTION, move |reduce| set_reduced_motion.set(reduce)).ok(),
    );

    let ctx = PreferencesContext {
        prefs,
        reduced_motion,
    };
    provide_context(ctx);

    // Persist changes, skipping the initial load
    Effect::new(move |prev: Option<Preferences>| {
        let current = prefs.get();
        if prev.is_some_and(|p| p != current) {
            if let Err(e) = storage::save_preferences(&BrowserStorage::local(), &key, &current) {
                warn!("Failed to save preferences: {}", e);
            }
        }
        current
    });

    Effect::new(move |_| {
        dom::set_root_class("reduce-motion", !ctx.motion_enabled());
    });

    ctx
}

pub fn use_preferences() -> PreferencesContext {
    expect_context::<PreferencesContext>()
}
