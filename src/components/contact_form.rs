use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen_futures::spawn_local;

use crate::config::ContactConfig;
use crate::platform::sound::{self, Tone};
use crate::preferences::use_preferences;
use crate::relay::{FormRelay, FormspreeRelay};
use crate::state::contact::{ContactFlow, Field, SubmitStatus};
use crate::storage::{self, BrowserStorage};

#[component]
fn FieldError(flow: RwSignal<ContactFlow>, field: Field) -> impl IntoView {
    move || {
        flow.with(|f| f.errors.get(field).map(str::to_string))
            .map(|msg| view! { <span class="field-error" role="alert">{msg}</span> })
    }
}

#[component]
pub fn ContactForm(
    config: ContactConfig,
    /// Storage key for the unsent draft
    #[prop(into)]
    draft_key: String,
) -> impl IntoView {
    let prefs = use_preferences();
    let draft = storage::load_draft(&BrowserStorage::local(), &draft_key)
        .filter(|_| prefs.prefs.get_untracked().auto_save);
    let flow = RwSignal::new(match draft {
        Some(d) => ContactFlow::new(config.success_reset_secs).with_draft(d),
        None => ContactFlow::new(config.success_reset_secs),
    });
    let relay = StoredValue::new(FormspreeRelay::new(config.endpoint));
    let reset_timer = StoredValue::new_local(None::<Timeout>);

    // Auto-save the draft while the visitor types
    Effect::new(move |_| {
        let form = flow.with(|f| f.form.clone());
        if !prefs.prefs.with(|p| p.auto_save) {
            return;
        }
        if let Err(e) = storage::save_draft(&BrowserStorage::local(), &draft_key, &form) {
            warn!("Failed to save contact draft: {}", e);
        }
    });

    let input = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            flow.update(|f| f.set_field(field, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = flow.try_update(|f| f.begin_submit()).flatten() else {
            sound::play(Tone::Error, prefs.sound_enabled());
            return;
        };
        sound::play(Tone::Click, prefs.sound_enabled());

        let relay = relay.get_value();
        spawn_local(async move {
            let result = relay.submit(&payload).await;
            match flow.try_update(|f| f.complete(result)).flatten() {
                Some(ticket) => {
                    sound::play(Tone::Success, prefs.sound_enabled());
                    let reset_ms = flow.with_untracked(|f| f.reset_after_ms());
                    let timer = Timeout::new(reset_ms, move || {
                        flow.update(|f| {
                            f.expire_success(ticket);
                        });
                    });
                    reset_timer.set_value(Some(timer));
                }
                None => sound::play(Tone::Error, prefs.sound_enabled()),
            }
        });
    };

    let is_submitting = move || flow.with(|f| f.is_submitting());
    let field_value = move |field: Field| {
        move || {
            flow.with(|f| match field {
                Field::Name => f.form.name.clone(),
                Field::Email => f.form.email.clone(),
                Field::Message => f.form.message.clone(),
            })
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="contact-name">"Name"</label>
                <input
                    id="contact-name"
                    type="text"
                    class="input"
                    autocomplete="name"
                    prop:value=field_value(Field::Name)
                    on:input=input(Field::Name)
                    disabled=is_submitting
                />
                <FieldError flow=flow field=Field::Name />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    type="email"
                    class="input"
                    autocomplete="email"
                    prop:value=field_value(Field::Email)
                    on:input=input(Field::Email)
                    disabled=is_submitting
                />
                <FieldError flow=flow field=Field::Email />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    class="input textarea"
                    rows="6"
                    prop:value=field_value(Field::Message)
                    on:input=input(Field::Message)
                    disabled=is_submitting
                ></textarea>
                <FieldError flow=flow field=Field::Message />
            </div>

            <button type="submit" class="btn btn-primary" disabled=is_submitting>
                {move || if is_submitting() { "Sending..." } else { "Send Message" }}
            </button>

            {move || {
                if flow.with(|f| f.status == SubmitStatus::Submitted) {
                    Some(view! {
                        <div class="form-status status-success" role="status">
                            "Thanks! Your message is on its way."
                        </div>
                    }.into_any())
                } else {
                    flow.with(|f| f.notice.clone()).map(|notice| view! {
                        <div class="form-status status-error" role="alert">
                            <span>{notice}</span>
                            <button
                                type="button"
                                class="btn-small btn-dismiss"
                                on:click=move |_| flow.update(|f| f.dismiss_notice())
                            >
                                "Dismiss"
                            </button>
                        </div>
                    }.into_any())
                }
            }}
        </form>
    }
}
