use super::*;
use serde_json::json;

#[test]
fn labeled_fields_follow_display_order() {
    let record = DisplayRecord::from_value(&json!({
        "block_hash": "0xabc",
        "state_root": "0x1",
        "parent_root": "0x0",
        "slot": 5,
        "proposer_index": 2
    }));
    let fields = labeled_fields(&record);
    assert_eq!(
        fields.map(|(label, value)| format!("{label}: {value}")),
        [
            "Block Hash: 0xabc",
            "Parent Hash: 0x0",
            "State Root: 0x1",
            "Slot: 5",
            "Proposer Index: 2",
        ]
    );
}

#[test]
fn labeled_fields_render_missing_values_blank() {
    let fields = labeled_fields(&DisplayRecord::default());
    assert!(fields.iter().all(|(_, value)| value.is_empty()));
}

#[test]
fn labeled_fields_pass_through_odd_values() {
    let record = DisplayRecord::from_value(&json!({ "slot": "not-a-number", "proposer_index": null }));
    let fields = labeled_fields(&record);
    assert_eq!(fields[3], ("Slot", "not-a-number".to_owned()));
    assert_eq!(fields[4], ("Proposer Index", String::new()));
}
