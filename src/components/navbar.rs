use leptos::prelude::*;

use crate::components::status_badge::ConnectionBadge;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::NavigationItem;
use crate::content::PROFILE;
use crate::platform::sound::{self, Tone};
use crate::preferences::use_preferences;
use crate::tracker::use_scroll;

/// Past this many pixels the bar gets its solid background.
const SCROLLED_THRESHOLD: u32 = 24;

#[component]
pub fn Navbar(items: Vec<NavigationItem>) -> impl IntoView {
    let scroll = use_scroll();
    let prefs = use_preferences();
    let (menu_open, set_menu_open) = signal(false);

    let links = items
        .into_iter()
        .map(|item| {
            let id = item.section_id().to_string();
            let id_active = id.clone();
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                sound::play(Tone::Click, prefs.sound_enabled());
                scroll.scroll_to_section(&id, prefs.motion_enabled());
                set_menu_open.set(false);
            };
            view! {
                <li class="nav-item">
                    <a
                        href=item.href.clone()
                        class="nav-link"
                        class:active=move || scroll.is_active(&id_active)
                        on:click=on_click
                    >
                        {item.name}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav
            class="navbar"
            class:scrolled={move || scroll.position() > SCROLLED_THRESHOLD}
            class:menu-open=move || menu_open.get()
        >
            <div class="navbar-inner">
                <a href="#home" class="navbar-brand">{PROFILE.name}</a>
                <button
                    class="navbar-menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
                <ul class="nav-list">{links}</ul>
                <div class="navbar-actions">
                    <ConnectionBadge />
                    <ThemeToggle />
                </div>
            </div>
            <div
                class="scroll-progress"
                style:width=move || format!("{:.1}%", scroll.progress.get() * 100.0)
            ></div>
        </nav>
    }
}
