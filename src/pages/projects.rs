use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content::{category_label, filter_projects, project_categories, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (category, set_category) = signal::<Option<&'static str>>(None);

    let filters = std::iter::once(None)
        .chain(project_categories(PROJECTS).into_iter().map(Some))
        .map(|choice| {
            let label = choice.map(category_label).unwrap_or_else(|| "All".to_string());
            view! {
                <button
                    class="btn btn-chip"
                    class:selected=move || category.get() == choice
                    on:click=move |_| set_category.set(choice)
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="filter-bar">{filters}</div>
            <div class="card-grid">
                {move || {
                    filter_projects(PROJECTS, category.get())
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
