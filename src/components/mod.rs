//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading/writing session state from
//! Leptos context providers.

pub mod field_error;
pub mod nav_bar;
