//! Block event wire model and display mapping for the block feed.
//!
//! This crate owns the JSON shape published by the block server and the
//! [`DisplayRecord`] projection rendered by `client`. It keeps the mapping
//! lenient by default: fields are read by name, missing fields stay absent,
//! and values are carried through without coercion. [`DecodePolicy::Strict`]
//! opts into typed validation against [`EthBlockData`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire field carrying the execution block hash.
pub const BLOCK_HASH: &str = "block_hash";
/// Wire field carrying the post-state root.
pub const STATE_ROOT: &str = "state_root";
/// Wire field carrying the parent block root.
pub const PARENT_ROOT: &str = "parent_root";
/// Wire field carrying the beacon slot number.
pub const SLOT: &str = "slot";
/// Wire field carrying the proposer validator index.
pub const PROPOSER_INDEX: &str = "proposer_index";

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame text is not valid JSON.
    #[error("frame is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// The frame is JSON but does not satisfy the typed block schema.
    #[error("frame does not match the block schema: {0}")]
    Schema(#[source] serde_json::Error),
}

/// How strictly incoming frames are checked before display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Map any JSON value by field lookup; absent fields stay absent.
    #[default]
    Lenient,
    /// Require every field with its wire type; reject anything else.
    Strict,
}

impl DecodePolicy {
    /// Stable lowercase name, as used in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Parse a policy from its configuration name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Typed block event as published by the block server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthBlockData {
    pub block_hash: String,
    pub state_root: String,
    pub parent_root: String,
    pub slot: u64,
    pub proposer_index: u64,
}

/// UI-facing projection of one block event.
///
/// Each field holds the raw JSON value found on the wire, or `None` when the
/// frame did not carry it. Records are never modified after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayRecord {
    pub block_hash: Option<Value>,
    pub state_root: Option<Value>,
    pub parent_root: Option<Value>,
    pub slot: Option<Value>,
    pub proposer_index: Option<Value>,
}

impl DisplayRecord {
    /// Map a parsed frame by direct field lookup.
    ///
    /// Non-object values produce a record with every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let pick = |key: &str| value.get(key).cloned();
        Self {
            block_hash: pick(BLOCK_HASH),
            state_root: pick(STATE_ROOT),
            parent_root: pick(PARENT_ROOT),
            slot: pick(SLOT),
            proposer_index: pick(PROPOSER_INDEX),
        }
    }
}

impl From<EthBlockData> for DisplayRecord {
    fn from(data: EthBlockData) -> Self {
        Self {
            block_hash: Some(Value::String(data.block_hash)),
            state_root: Some(Value::String(data.state_root)),
            parent_root: Some(Value::String(data.parent_root)),
            slot: Some(Value::from(data.slot)),
            proposer_index: Some(Value::from(data.proposer_index)),
        }
    }
}

/// Render a record field as plain text.
///
/// Strings are shown without quotes, absent and `null` values as empty text,
/// and everything else in its compact JSON form.
#[must_use]
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Decode one text frame into a display record.
///
/// # Errors
///
/// Returns [`FrameError::Json`] when the text is not JSON, and
/// [`FrameError::Schema`] when `policy` is [`DecodePolicy::Strict`] and the
/// value does not deserialize into [`EthBlockData`].
pub fn decode_frame(text: &str, policy: DecodePolicy) -> Result<DisplayRecord, FrameError> {
    let value: Value = serde_json::from_str(text).map_err(FrameError::Json)?;
    match policy {
        DecodePolicy::Lenient => Ok(DisplayRecord::from_value(&value)),
        DecodePolicy::Strict => {
            let data: EthBlockData = serde_json::from_value(value).map_err(FrameError::Schema)?;
            Ok(DisplayRecord::from(data))
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
