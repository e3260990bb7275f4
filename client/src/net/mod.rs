//! Networking modules for the block server feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `feed_client` manages the websocket lifecycle and frame dispatch; frame
//! decoding itself lives in the `blocks` crate.

pub mod feed_client;
