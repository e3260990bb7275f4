//! Bottom status bar showing connection status and feed telemetry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces the session label, connection state, record count and dropped
//! frames so a stalled or failing feed is visible without the console.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::feed::{ConnectionStatus, FeedState};

/// Status bar at the bottom of the feed page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    let status = move || feed.with(|f| f.connection_status);
    let status_class = move || connection_status_class(status());
    let status_label = move || connection_status_label(status());
    let client_label = move || feed.with(FeedState::client_label);
    let block_count = move || format_block_count(feed.with(FeedState::len));
    let last_error_title = move || feed.with(|f| f.last_error.clone()).unwrap_or_default();
    let dropped = move || format_dropped(feed.with(|f| f.dropped));
    let last_error = move || feed.with(|f| f.last_error.clone()).unwrap_or_default();

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item" title=last_error_title>
                    <span class=status_class></span>
                    {status_label}
                </span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{client_label}</span>
            </div>
            <div class="status-bar__section">
                <span class="status-bar__item">{block_count}</span>
                {move || {
                    dropped()
                        .map(|text| {
                            view! {
                                <span class="status-bar__divider"></span>
                                <span class="status-bar__item status-bar__item--warn" title=last_error>
                                    {text}
                                </span>
                            }
                        })
                }}
            </div>
        </div>
    }
}

fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        ConnectionStatus::Failed => "status-bar__dot status-bar__dot--failed",
    }
}

fn connection_status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connected",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Disconnected => "disconnected",
        ConnectionStatus::Failed => "failed",
    }
}

fn format_block_count(count: usize) -> String {
    if count == 1 { "1 block".to_owned() } else { format!("{count} blocks") }
}

fn format_dropped(dropped: u64) -> Option<String> {
    (dropped > 0).then(|| format!("{dropped} dropped"))
}
