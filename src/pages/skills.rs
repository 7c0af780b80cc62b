use leptos::prelude::*;

use crate::content::{
    category_color, category_icon, category_label, search_skills, skills_by_category, Skill, SKILLS,
};

#[component]
fn SkillGroup(category: &'static str, skills: Vec<Skill>) -> impl IntoView {
    let accent = category_color(category);
    let bars = skills
        .into_iter()
        .map(|skill| {
            view! {
                <li class="skill">
                    <div class="skill-header">
                        <span class="skill-name">{skill.name}</span>
                        <span class="skill-level">{format!("{}%", skill.level)}</span>
                    </div>
                    <div class="skill-bar">
                        <div
                            class="skill-bar-fill"
                            style:width=format!("{}%", skill.level)
                            style:background-color=accent
                        ></div>
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card skill-group">
            <h3>
                <span class="skill-icon" style:color=accent>{category_icon(category)}</span>
                " "
                {category_label(category)}
            </h3>
            <ul class="skill-list">{bars}</ul>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let matches = Memo::new(move |_| term.with(|t| search_skills(SKILLS, t)));

    view! {
        <section id="skills" class="section skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skill-search">
                <input
                    type="search"
                    class="input"
                    placeholder="Search skills or keywords"
                    aria-label="Search skills"
                    prop:value=move || term.get()
                    on:input=move |ev| set_term.set(event_target_value(&ev))
                />
                <Show when=move || term.with(|t| !t.is_empty())>
                    <button
                        type="button"
                        class="btn-small"
                        aria-label="Clear search"
                        on:click=move |_| set_term.set(String::new())
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
            {move || {
                let found = matches.get();
                if found.is_empty() {
                    view! {
                        <p class="empty-state">
                            {format!("No skills found matching \"{}\"", term.get().trim())}
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {skills_by_category(&found)
                                .into_iter()
                                .map(|(category, skills)| view! { <SkillGroup category=category skills=skills /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
