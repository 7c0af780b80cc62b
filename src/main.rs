mod app;
mod components;
mod config;
mod content;
mod error;
mod pages;
mod platform;
mod preferences;
mod relay;
mod state;
mod storage;
mod theme;
mod tracker;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::embedded();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(config.log_level());
    log::info!("Starting portfolio with {} sections", config.navigation.len());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
