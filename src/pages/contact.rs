use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::share_button::CopyEmail;
use crate::config::SiteConfig;

#[component]
pub fn ContactSection(config: SiteConfig) -> impl IntoView {
    let email = config.contact.recipient_email.clone();

    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">"Contact"</h2>
            <p class="page-description">
                "Have a project in mind or just want to say hello? Send a message or email me directly."
            </p>
            <CopyEmail email=email />
            <ContactForm config=config.contact draft_key=config.storage.draft_key />
        </section>
    }
}
