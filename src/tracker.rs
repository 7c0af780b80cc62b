//! Scroll tracker: feeds window scroll/resize events into [`ScrollState`].

use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};

use crate::config::SiteConfig;
use crate::platform::dom;
use crate::platform::listener::EventListener;
use crate::state::scroll::{scroll_progress, ScrollState};

#[derive(Clone, Copy)]
pub struct ScrollContext {
    pub state: ReadSignal<ScrollState>,
    pub progress: ReadSignal<f64>,
    offset: f64,
}

impl ScrollContext {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.state.with(|s| s.is_active(section_id))
    }

    pub fn position(&self) -> u32 {
        self.state.with(|s| s.position)
    }

    /// Scroll so the section's top sits just below the fixed navigation bar.
    pub fn scroll_to_section(&self, section_id: &str, smooth: bool) {
        match dom::section_top(section_id) {
            Some(top) => dom::scroll_to(top - self.offset, smooth),
            None => warn!("No section with id '{}'", section_id),
        }
    }
}

/// Start tracking the page sections named in the navigation config.
///
/// Sections are measured once the view has mounted, then on every scroll
/// and resize event. The listeners are owned by the current reactive owner
/// and removed when it is cleaned up.
pub fn provide_scroll_tracker(config: &SiteConfig) -> ScrollContext {
    let ids = config.section_ids();
    let offset = config.scroll.offset;

    let initial = ids.first().cloned().unwrap_or_default();
    let (state, set_state) = signal(ScrollState::new(initial));
    let (progress, set_progress) = signal(0.0_f64);

    let ctx = ScrollContext {
        state,
        progress,
        offset,
    };
    provide_context(ctx);

    let listeners = StoredValue::new_local(Vec::<EventListener>::new());

    Effect::new(move |_| {
        let ids = ids.clone();
        let sample = Rc::new(move || {
            let sections = dom::measure_sections(&ids);
            let y = dom::scroll_y();
            set_state.update(|s| {
                if s.observe(y, &sections, offset) {
                    debug!("Active section -> {}", s.active);
                }
            });
            set_progress.set(scroll_progress(y, dom::document_height(), dom::viewport_height()));
        });

        sample();

        let mut registered = Vec::new();
        for event in ["scroll", "resize"] {
            let on_event = Rc::clone(&sample);
            match EventListener::on_window(event, move |_| on_event()) {
                Ok(listener) => registered.push(listener),
                Err(e) => warn!("Scroll tracking disabled for '{}': {}", event, e),
            }
        }
        listeners.set_value(registered);
    });

    ctx
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}
