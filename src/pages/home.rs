use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::navbar::Navbar;
use crate::components::preferences_panel::PreferencesPanel;
use crate::config::SiteConfig;
use crate::content::PROFILE;
use crate::pages::about::AboutSection;
use crate::pages::contact::ContactSection;
use crate::pages::education::EducationSection;
use crate::pages::hero::HeroSection;
use crate::pages::projects::ProjectsSection;
use crate::pages::skills::SkillsSection;
use crate::tracker::provide_scroll_tracker;

/// The page shell: navigation, every section, and the footer.
///
/// The scroll tracker lives in this component's owner, so leaving the page
/// removes its listeners.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    provide_scroll_tracker(&config);

    view! {
        <Navbar items=config.navigation.clone() />
        <main class="content">
            <HeroSection config=config.clone() />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <EducationSection />
            <ContactSection config=config.clone() />
        </main>
        <footer class="footer">
            <span>{format!("\u{00A9} {}", PROFILE.name)}</span>
            <PreferencesPanel />
        </footer>
        <BackToTop />
    }
}
