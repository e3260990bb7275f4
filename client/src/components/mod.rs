//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed list and page chrome while reading shared
//! state from Leptos context providers.

pub mod block_card;
pub mod block_list;
pub mod site_footer;
pub mod status_bar;
