//! Scrolling list of received blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `FeedState` records in arrival order, followed by an invisible
//! sentinel. Each append bumps the feed revision, which re-pins the viewport
//! to the sentinel.

#[cfg(test)]
#[path = "block_list_test.rs"]
mod block_list_test;

use std::ops::Range;

use leptos::prelude::*;

use crate::components::block_card::BlockCard;
use crate::state::feed::FeedState;
use crate::util::scroll::pin_to_sentinel;

/// Block list with auto-scroll to the newest entry.
#[component]
pub fn BlockList() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let sentinel = NodeRef::<leptos::html::Div>::new();

    let revision = Memo::new(move |_| feed.with(|f| f.revision));
    Effect::new(move || {
        let _ = revision.get();
        pin_to_sentinel(sentinel);
    });

    // Rows are keyed by position; the sequence is append-only, so only the
    // new index mounts a row and only that record is cloned out of state.
    let entries = move || feed.with(entry_keys);
    let is_empty = move || feed.with(FeedState::is_empty);

    view! {
        <div class="block-list">
            <Show when=is_empty>
                <div class="block-list__empty">"Waiting for blocks..."</div>
            </Show>
            <For
                each=entries
                key=|index| *index
                children=move |index| {
                    feed.with_untracked(|f| f.records().get(index).cloned())
                        .map(|record| view! { <BlockCard record/> })
                }
            />
            <div class="block-list__sentinel" node_ref=sentinel></div>
        </div>
    }
}

/// Row keys for the current feed: one index per record.
fn entry_keys(feed: &FeedState) -> Range<usize> {
    0..feed.len()
}
