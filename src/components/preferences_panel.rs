use leptos::prelude::*;

use crate::components::theme_toggle::ThemePicker;
use crate::preferences::use_preferences;
use crate::state::preferences::Preferences;

#[component]
fn PreferenceSwitch(
    #[prop(into)] label: String,
    #[prop(into)] description: String,
    read: fn(&Preferences) -> bool,
    write: fn(&mut Preferences, bool),
) -> impl IntoView {
    let prefs = use_preferences();

    view! {
        <label class="preference-row">
            <input
                type="checkbox"
                prop:checked=move || prefs.prefs.with(read)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    prefs.update(|p| write(p, checked));
                }
            />
            <span class="preference-text">
                <strong>{label}</strong>
                <span class="section-description">{description}</span>
            </span>
        </label>
    }
}

/// Footer drawer with appearance and behaviour settings.
#[component]
pub fn PreferencesPanel() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="preferences-panel" class:open=move || open.get()>
            <button
                class="btn btn-ghost"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Preferences"
            </button>
            <Show when=move || open.get()>
                <section class="settings-section">
                    <h3>"Theme"</h3>
                    <ThemePicker />

                    <PreferenceSwitch
                        label="Auto dark mode"
                        description="Switch to dark in the evening while following the system theme."
                        read=Preferences::auto_dark_enabled
                        write=|p, v| p.auto_dark = Some(v)
                    />

                    <h3>"Behaviour"</h3>
                    <PreferenceSwitch
                        label="Animations"
                        description="Smooth scrolling and transitions. Your system's reduced-motion setting always wins."
                        read=|p| p.animations
                        write=|p, v| p.animations = v
                    />
                    <PreferenceSwitch
                        label="Sound"
                        description="Soft click tones on buttons."
                        read=|p| p.sound
                        write=|p, v| p.sound = v
                    />
                    <PreferenceSwitch
                        label="Auto-save"
                        description="Keep an unsent contact message in this browser."
                        read=|p| p.auto_save
                        write=|p, v| p.auto_save = v
                    />
                </section>
            </Show>
        </div>
    }
}
