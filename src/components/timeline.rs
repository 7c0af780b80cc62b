use leptos::prelude::*;

/// One stop on a vertical timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
}

#[component]
pub fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {items
                .into_iter()
                .map(|item| view! {
                    <li class="timeline-item">
                        <span class="timeline-marker"></span>
                        <div class="timeline-content">
                            <span class="timeline-period">{item.period}</span>
                            <h3>{item.title}</h3>
                            <p class="timeline-subtitle">{item.subtitle}</p>
                            <p>{item.body}</p>
                        </div>
                    </li>
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
