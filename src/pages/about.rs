use leptos::prelude::*;

use crate::components::timeline::{Timeline, TimelineItem};
use crate::content::{PROFILE, TIMELINE};

#[component]
pub fn AboutSection() -> impl IntoView {
    let items = TIMELINE
        .iter()
        .map(|entry| TimelineItem {
            period: entry.period,
            title: entry.title,
            subtitle: entry.organization,
            body: entry.description,
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="section about">
            <h2 class="section-title">"About"</h2>
            <p class="about-summary">{PROFILE.summary}</p>
            <p class="about-location">{format!("Based in {}", PROFILE.location)}</p>
            <Timeline items=items />
        </section>
    }
}
