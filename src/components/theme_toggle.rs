use leptos::prelude::*;

use crate::platform::sound::{self, Tone};
use crate::preferences::use_preferences;
use crate::state::theme::{Appearance, ThemeMode};
use crate::theme::use_theme;

fn mode_icon(mode: ThemeMode, appearance: Appearance) -> &'static str {
    match mode {
        ThemeMode::Light => "\u{2600}",
        ThemeMode::Dark => "\u{263E}",
        ThemeMode::System if appearance.is_dark() => "\u{25D1}",
        ThemeMode::System => "\u{25D0}",
    }
}

/// Cycles light → dark → system. The title names the resolved appearance
/// when following the system.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let prefs = use_preferences();

    let title = move || match theme.mode() {
        ThemeMode::System => format!("Theme: System ({})", theme.appearance().as_str()),
        mode => format!("Theme: {}", mode.label()),
    };

    view! {
        <button
            class="theme-toggle"
            title=title
            aria-label=title
            on:click=move |_| {
                sound::play(Tone::Toggle, prefs.sound_enabled());
                theme.set_mode(theme.mode().next());
            }
        >
            {move || mode_icon(theme.mode(), theme.appearance())}
        </button>
    }
}

/// Explicit three-way picker used in the preferences panel.
#[component]
pub fn ThemePicker() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="theme-picker" role="radiogroup" aria-label="Theme">
            {ThemeMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            class="btn btn-chip"
                            class:selected=move || theme.mode() == mode
                            role="radio"
                            aria-checked=move || (theme.mode() == mode).to_string()
                            on:click=move |_| theme.set_mode(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
