//! Small helpers over `window`/`document` used by the page shell.

use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::state::scroll::SectionBounds;

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Add or remove a class on `<html>`.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(html) = root_element() {
        let class_list = html.class_list();
        let _ = if enabled {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(html) = root_element() {
        let _ = html.set_attribute(name, value);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    root_element().map_or(0.0, |html| f64::from(html.scroll_height()))
}

/// Bounds of each section in document coordinates, in the order given.
/// Ids without an element in the page are skipped.
pub fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let offset = scroll_y();
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds::new(id.clone(), rect.top() + offset, rect.height()))
        })
        .collect()
}

/// Top of a section in document coordinates.
pub fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_y())
}

pub fn scroll_to(y: f64, smooth: bool) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(y.max(0.0));
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}
