//! Utility helpers shared across the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod base_path;
pub mod debounce;
pub mod navigate;
pub mod password;
pub mod persistence;
