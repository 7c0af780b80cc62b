use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, info};

use crate::platform::network;

/// Browser connectivity as reported by `navigator.onLine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Online,
    Offline,
}

impl ConnectionStatus {
    fn from_online(online: bool) -> Self {
        if online {
            ConnectionStatus::Online
        } else {
            ConnectionStatus::Offline
        }
    }
}

#[component]
pub fn StatusBadge(
    /// The label text, e.g. "Offline"
    #[prop(into)]
    label: String,
    status: ConnectionStatus,
) -> impl IntoView {
    let title = label.clone();
    let (icon, class) = match status {
        ConnectionStatus::Online => ("\u{25CF}", "status-badge status-online"),
        ConnectionStatus::Offline => ("\u{25CB}", "status-badge status-offline"),
    };

    view! {
        <span class=class title=title>
            <span class="status-icon">{icon}</span>
            <span class="status-label">{label}</span>
        </span>
    }
}

/// How long the "Back online" badge lingers after the connection returns.
const RESTORED_NOTICE_MS: u32 = 3_000;

/// Shows a badge while the visitor is offline, and briefly once the
/// connection comes back.
#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let (status, set_status) = signal(ConnectionStatus::from_online(network::is_online()));
    let (visible, set_visible) = signal(status.get_untracked() == ConnectionStatus::Offline);
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    // Held by this component's owner; dropped with it
    let _watch = StoredValue::new_local(
        network::watch_online(move |online| {
            info!("Connection {}", if online { "restored" } else { "lost" });
            let next = ConnectionStatus::from_online(online);
            set_status.set(next);
            set_visible.set(true);
            let timer = (next == ConnectionStatus::Online)
                .then(|| Timeout::new(RESTORED_NOTICE_MS, move || set_visible.set(false)));
            hide_timer.set_value(timer);
        })
        .map_err(|e| debug!("Not watching connectivity: {}", e))
        .ok(),
    );

    move || {
        visible.get().then(|| match status.get() {
            ConnectionStatus::Online => view! { <StatusBadge label="Back online" status=ConnectionStatus::Online /> },
            ConnectionStatus::Offline => view! { <StatusBadge label="Offline" status=ConnectionStatus::Offline /> },
        })
    }
}
