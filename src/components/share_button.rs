use leptos::prelude::*;
use log::debug;
use wasm_bindgen_futures::spawn_local;

use crate::platform::share::{self, ShareOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    None,
    Done(&'static str),
    Failed,
}

#[component]
pub fn ShareButton(#[prop(into)] title: String, #[prop(into)] text: String) -> impl IntoView {
    let (feedback, set_feedback) = signal(Feedback::None);
    let payload = StoredValue::new((title, text));

    let on_click = move |_| {
        let (title, text) = payload.get_value();
        spawn_local(async move {
            match share::share_page(&title, &text).await {
                Ok(ShareOutcome::Shared) => set_feedback.set(Feedback::Done("Thanks for sharing!")),
                Ok(ShareOutcome::Copied) => set_feedback.set(Feedback::Done("Link copied")),
                Err(e) => {
                    // Dismissing the share sheet also lands here
                    debug!("Share skipped: {}", e);
                    set_feedback.set(Feedback::Failed);
                }
            }
        });
    };

    view! {
        <button class="btn btn-ghost" on:click=on_click>"Share"</button>
        {move || match feedback.get() {
            Feedback::Done(msg) => Some(view! { <span class="status-text status-saved">{msg}</span> }.into_any()),
            Feedback::Failed => Some(view! { <span class="status-text status-not-set">"Sharing unavailable"</span> }.into_any()),
            Feedback::None => None,
        }}
    }
}

/// Copies an address to the clipboard, falling back to a `mailto:` link.
#[component]
pub fn CopyEmail(#[prop(into)] email: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let address = StoredValue::new(email.clone());

    let on_click = move |_| {
        let email = address.get_value();
        spawn_local(async move {
            match share::copy_text(&email).await {
                Ok(()) => set_copied.set(true),
                Err(e) => {
                    debug!("Clipboard unavailable, opening mail client: {}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&format!("mailto:{}", email));
                    }
                }
            }
        });
    };

    view! {
        <button class="btn btn-ghost copy-email" on:click=on_click title="Copy email address">
            {email}
            <span class="copy-hint">{move || if copied.get() { " \u{2713} copied" } else { "" }}</span>
        </button>
    }
}
