use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::PortfolioError;

/// Runs `release` exactly once, when dropped.
pub struct OnDrop<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// A registered DOM event listener. Dropping it removes the listener, so
/// owning one in a reactive scope ties the subscription to that scope.
pub struct EventListener {
    // Fields drop in order: deregister before the closure is freed.
    _registration: OnDrop<Box<dyn FnOnce()>>,
    _callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, PortfolioError> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let function: js_sys::Function = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target
            .add_event_listener_with_callback(event, &function)
            .map_err(|e| PortfolioError::js("addEventListener", e))?;

        let target = target.clone();
        let release: Box<dyn FnOnce()> = Box::new(move || {
            let _ = target.remove_event_listener_with_callback(event, &function);
            log::trace!("Removed '{}' listener", event);
        });
        Ok(Self {
            _registration: OnDrop::new(release),
            _callback: callback,
        })
    }

    /// Listen on `window`.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, PortfolioError> {
        let window = web_sys::window().ok_or(PortfolioError::Unavailable("window"))?;
        Self::new(&window, event, handler)
    }
}
