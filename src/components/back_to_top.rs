use leptos::prelude::*;

use crate::platform::dom;
use crate::preferences::use_preferences;
use crate::tracker::use_scroll;

/// Reading progress past which the button appears.
const SHOW_AFTER_PROGRESS: f64 = 0.25;

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll();
    let prefs = use_preferences();

    view! {
        <Show when={move || scroll.progress.get() > SHOW_AFTER_PROGRESS}>
            <button
                class="back-to-top"
                aria-label="Back to top"
                on:click=move |_| dom::scroll_to(0.0, prefs.motion_enabled())
            >
                "\u{2191}"
            </button>
        </Show>
    }
}
