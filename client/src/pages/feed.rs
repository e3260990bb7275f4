//! Feed page — the live block list for one mounted session.
//!
//! ARCHITECTURE
//! ============
//! The page owns the session: it creates a fresh `FeedState` on mount, opens
//! exactly one feed connection once hydrated, and releases that connection in
//! `on_cleanup`. Remounting therefore starts from an empty list with a new
//! connection, and nothing from the previous mount keeps writing.

use leptos::prelude::*;

use crate::components::block_list::BlockList;
use crate::components::status_bar::StatusBar;
use crate::config::FeedConfig;
use crate::net::feed_client::FeedSubscription;
use crate::state::feed::FeedState;

/// Feed page — header, block list and status bar.
#[component]
pub fn FeedPage() -> impl IntoView {
    let config = expect_context::<FeedConfig>();
    let feed = RwSignal::new(FeedState::new(config.client_id.clone()));
    provide_context(feed);

    let subscription = StoredValue::new_local(None::<FeedSubscription>);

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || {
            if subscription.with_value(Option::is_some) {
                return;
            }
            let sub = crate::net::feed_client::spawn_feed_client(&config, feed);
            subscription.set_value(Some(sub));
        });
    }

    on_cleanup(move || {
        subscription.try_update_value(|slot| {
            if let Some(mut sub) = slot.take() {
                sub.unsubscribe();
            }
        });
    });

    view! {
        <div class="feed-page">
            <div class="feed-page__panel">
                <div class="feed-page__title">
                    <p>"Modular Chat"</p>
                </div>
                <BlockList/>
            </div>
            <StatusBar/>
        </div>
    }
}
