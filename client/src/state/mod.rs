//! Reactive state models provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data so they can be unit tested natively; pages
//! wrap them in `RwSignal` and hand them to components via context.

pub mod feed;
