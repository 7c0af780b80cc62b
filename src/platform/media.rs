//! `matchMedia` queries for OS-level appearance and motion settings.

use wasm_bindgen::JsCast;

use super::listener::EventListener;
use crate::error::PortfolioError;

pub const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

fn media_query(query: &str) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

/// Current state of a media query, `None` when `matchMedia` is unavailable.
pub fn matches(query: &str) -> Option<bool> {
    media_query(query).map(|mql| mql.matches())
}

pub fn prefers_dark() -> Option<bool> {
    matches(PREFERS_DARK)
}

pub fn prefers_reduced_motion() -> bool {
    matches(PREFERS_REDUCED_MOTION).unwrap_or(false)
}

/// Call `on_change` with the new match state every time `query` flips.
pub fn watch(
    query: &'static str,
    on_change: impl Fn(bool) + 'static,
) -> Result<EventListener, PortfolioError> {
    let mql = media_query(query).ok_or(PortfolioError::Unavailable("matchMedia"))?;
    let target: &web_sys::EventTarget = mql.unchecked_ref();
    let source = mql.clone();
    EventListener::new(target, "change", move |_| on_change(source.matches()))
}
