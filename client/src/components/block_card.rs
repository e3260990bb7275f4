//! One labeled section per received block.

#[cfg(test)]
#[path = "block_card_test.rs"]
mod block_card_test;

use blocks::{DisplayRecord, display_text};
use leptos::prelude::*;

/// Field labels paired with their rendered text, in display order.
pub fn labeled_fields(record: &DisplayRecord) -> [(&'static str, String); 5] {
    [
        ("Block Hash", display_text(record.block_hash.as_ref())),
        ("Parent Hash", display_text(record.parent_root.as_ref())),
        ("State Root", display_text(record.state_root.as_ref())),
        ("Slot", display_text(record.slot.as_ref())),
        ("Proposer Index", display_text(record.proposer_index.as_ref())),
    ]
}

/// Block card showing all five record fields as labeled text.
#[component]
pub fn BlockCard(record: DisplayRecord) -> impl IntoView {
    let fields = labeled_fields(&record)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <p class="block-card__field">
                    <span class="block-card__label">{label}": "</span>
                    <span class="block-card__value">{value}</span>
                </p>
            }
        })
        .collect_view();

    view! { <section class="block-card">{fields}</section> }
}
