//! Keep the feed viewport pinned to its newest entry.
//!
//! The list renders an empty sentinel `<div>` after its last entry. After a
//! change, the sentinel is scrolled into view on the next animation frame so
//! the new entry is already painted. Requires a browser environment; SSR
//! paths no-op.

use leptos::html::Div;
use leptos::prelude::NodeRef;

/// Smooth-scroll the sentinel into view.
///
/// Does nothing if the sentinel has not been mounted yet.
pub fn pin_to_sentinel(sentinel: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::prelude::request_animation_frame(move || {
            use leptos::prelude::GetUntracked;

            let Some(el) = sentinel.get_untracked() else {
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::End);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sentinel;
    }
}
