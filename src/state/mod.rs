//! Shared client state provided through Leptos context.

pub mod roster;
pub mod session;
