use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;

use crate::platform::files;
use crate::storage::{self, BrowserStorage};

/// Profile picture that the visitor can swap for a local image. The image
/// never leaves the browser; it is cached in `localStorage` as a data URL.
#[component]
pub fn AvatarUpload(
    /// Image shown until a custom one is uploaded
    #[prop(into)]
    fallback_src: String,
    #[prop(into)] alt: String,
    /// Storage key for the cached data URL
    #[prop(into)]
    storage_key: String,
    max_bytes: u64,
) -> impl IntoView {
    let stored = storage::load_avatar(&BrowserStorage::local(), &storage_key);
    let (avatar, set_avatar) = signal(stored);
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let storage_key = StoredValue::new(storage_key);

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        set_error_message.set(None);

        files::read_as_data_url(&file, max_bytes, move |result| match result {
            Ok(data_url) => {
                let key = storage_key.get_value();
                if let Err(e) = storage::save_avatar(&BrowserStorage::local(), &key, &data_url) {
                    // Still shown for this visit; it just won't survive a reload
                    warn!("Avatar not cached: {}", e);
                    set_error_message.set(Some(e.user_message()));
                }
                info!("Avatar updated ({} chars)", data_url.len());
                set_avatar.set(Some(data_url));
            }
            Err(e) => set_error_message.set(Some(e.user_message())),
        });
        input.set_value("");
    };

    view! {
        <div class="avatar-upload">
            <label class="avatar-frame" title="Change picture">
                <img
                    class="avatar"
                    src=move || avatar.get().unwrap_or_else(|| fallback_src.clone())
                    alt=alt
                />
                <input
                    type="file"
                    accept="image/png,image/jpeg,image/webp,image/gif"
                    class="visually-hidden"
                    on:change=on_change
                />
            </label>
            <Show when=move || error_message.get().is_some()>
                <span class="status-text status-error">
                    {move || error_message.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
