//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and admin workflows while reading shared
//! session state and backend clients from Leptos context providers.

pub mod create_user_form;
pub mod flash_message;
pub mod user_controls;
pub mod user_table;
