use leptos::prelude::*;

use crate::content::{category_color, category_label, Project};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let accent = category_color(project.category);

    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect::<Vec<_>>();

    view! {
        <article class="project-card" style:border-top-color=accent>
            <div class="project-card-header">
                <h3 class="project-card-title">{project.title}</h3>
                <span class="project-category" style:color=accent>
                    {category_label(project.category)}
                </span>
            </div>
            <p class="project-description">{project.description}</p>
            <div class="tag-list">{tags}</div>
            <div class="project-links">
                {project.repo_url.map(|url| view! {
                    <a href=url class="btn-small" target="_blank" rel="noopener">"Source"</a>
                })}
                {project.live_url.map(|url| view! {
                    <a href=url class="btn-small btn-primary" target="_blank" rel="noopener">"Live"</a>
                })}
            </div>
        </article>
    }
}
