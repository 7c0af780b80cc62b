use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::preferences::provide_preferences;
use crate::theme::provide_theme;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <a href="/" class="btn btn-primary">"Back home"</a>
        </div>
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Stores live for the whole app; section trackers live with the page
    let prefs = provide_preferences(&config);
    provide_theme(&config, prefs);
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
