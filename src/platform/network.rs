use super::listener::EventListener;
use crate::error::PortfolioError;

/// `navigator.onLine`; assumes online when the browser cannot say.
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Keeps the `online`/`offline` subscriptions alive until dropped.
pub struct OnlineWatch {
    _online: EventListener,
    _offline: EventListener,
}

pub fn watch_online(on_change: impl Fn(bool) + Clone + 'static) -> Result<OnlineWatch, PortfolioError> {
    let went_online = on_change.clone();
    let online = EventListener::on_window("online", move |_| went_online(true))?;
    let offline = EventListener::on_window("offline", move |_| on_change(false))?;
    Ok(OnlineWatch {
        _online: online,
        _offline: offline,
    })
}
