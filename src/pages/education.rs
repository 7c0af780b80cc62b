use leptos::prelude::*;

use crate::components::timeline::{Timeline, TimelineItem};
use crate::content::EDUCATION;

#[component]
pub fn EducationSection() -> impl IntoView {
    let items = EDUCATION
        .iter()
        .map(|e| TimelineItem {
            period: e.period,
            title: e.degree,
            subtitle: e.school,
            body: e.details,
        })
        .collect::<Vec<_>>();

    view! {
        <section id="education" class="section education">
            <h2 class="section-title">"Education"</h2>
            <Timeline items=items />
        </section>
    }
}
