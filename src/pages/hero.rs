use leptos::prelude::*;

use crate::components::avatar_upload::AvatarUpload;
use crate::components::share_button::ShareButton;
use crate::config::SiteConfig;
use crate::content::PROFILE;

#[component]
pub fn HeroSection(config: SiteConfig) -> impl IntoView {
    view! {
        <section id="home" class="section hero">
            <AvatarUpload
                fallback_src="/assets/avatar.svg"
                alt=PROFILE.name
                storage_key=config.storage.avatar_key
                max_bytes=config.avatar.max_bytes
            />
            <div class="hero-text">
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-name">{PROFILE.name}</h1>
                <h2 class="hero-role">{PROFILE.role}</h2>
                <p class="page-description">{PROFILE.tagline}</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"See my work"</a>
                    <a href="#contact" class="btn btn-ghost">"Get in touch"</a>
                    <ShareButton
                        title=format!("{} - {}", PROFILE.name, PROFILE.role)
                        text=PROFILE.tagline
                    />
                </div>
            </div>
        </section>
    }
}
