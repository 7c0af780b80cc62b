//! Scroll position → active navigation section.

/// Vertical extent of a page section in document coordinates,
/// covering `[top, top + height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// The last section in document order whose range contains `marker`.
///
/// Later sections win on overlap.
pub fn active_section(sections: &[SectionBounds], marker: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(marker))
        .map(|section| section.id.as_str())
}

/// Fraction of the page scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub position: u32,
    pub active: String,
}

impl ScrollState {
    pub fn new(initial_active: impl Into<String>) -> Self {
        Self {
            position: 0,
            active: initial_active.into(),
        }
    }

    /// Record a scroll sample. Keeps the previous active id when no section
    /// contains `scroll_y + offset`. Returns `true` if the active id changed.
    pub fn observe(&mut self, scroll_y: f64, sections: &[SectionBounds], offset: f64) -> bool {
        let scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        self.position = scroll_y.round() as u32;

        match active_section(sections, scroll_y + offset) {
            Some(id) if id != self.active => {
                self.active = id.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 800.0),
            SectionBounds::new("projects", 1600.0, 800.0),
        ]
    }

    #[test]
    fn test_offset_applies_before_matching() {
        let sections = three_sections();
        let mut state = ScrollState::new("home");

        state.observe(650.0, &sections, 100.0);
        assert_eq!(state.active, "home");

        state.observe(750.0, &sections, 100.0);
        assert_eq!(state.active, "about", "750 + 100 lands in about");

        state.observe(1550.0, &sections, 100.0);
        assert_eq!(state.active, "projects");
        assert_eq!(state.position, 1550);
    }

    #[test]
    fn test_range_upper_bound_is_exclusive() {
        let sections = three_sections();
        assert_eq!(active_section(&sections, 799.9), Some("home"));
        assert_eq!(active_section(&sections, 800.0), Some("about"));
        assert_eq!(active_section(&sections, 2400.0), None);
    }

    #[test]
    fn test_no_match_retains_previous() {
        let sections = three_sections();
        let mut state = ScrollState::new("home");
        state.observe(1700.0, &sections, 100.0);
        assert_eq!(state.active, "projects");

        let changed = state.observe(5000.0, &sections, 100.0);
        assert!(!changed);
        assert_eq!(state.active, "projects");
        assert_eq!(state.position, 5000);
    }

    #[test]
    fn test_above_first_section_keeps_initial() {
        let sections = vec![
            SectionBounds::new("about", 400.0, 400.0),
            SectionBounds::new("projects", 800.0, 400.0),
        ];
        let mut state = ScrollState::new("about");
        state.observe(0.0, &sections, 100.0);
        assert_eq!(state.active, "about");
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 500.0, 1000.0),
        ];
        assert_eq!(active_section(&sections, 700.0), Some("b"));
        assert_eq!(active_section(&sections, 400.0), Some("a"));
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 500.0),
            SectionBounds::new("empty", 500.0, 0.0),
            SectionBounds::new("b", 500.0, 500.0),
        ];
        assert_eq!(active_section(&sections, 500.0), Some("b"));
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let sections = three_sections();
        let mut state = ScrollState::new("home");
        assert!(!state.observe(10.0, &sections, 100.0));
        assert!(state.observe(900.0, &sections, 100.0));
        assert!(!state.observe(950.0, &sections, 100.0));
    }

    #[test]
    fn test_negative_overscroll_clamps_to_zero() {
        let sections = three_sections();
        let mut state = ScrollState::new("home");
        state.observe(-40.0, &sections, 100.0);
        assert_eq!(state.position, 0);
        assert_eq!(state.active, "home");
    }

    #[test]
    fn test_settled_value_independent_of_event_count() {
        let sections = three_sections();
        let mut every_event = ScrollState::new("home");
        for y in (0..=1700).step_by(17) {
            every_event.observe(y as f64, &sections, 100.0);
        }
        let mut coalesced = ScrollState::new("home");
        coalesced.observe(1700.0, &sections, 100.0);
        assert_eq!(every_event, coalesced);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0.0, 600.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
