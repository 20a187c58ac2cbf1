//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notifications while reading/writing
//! shared state from Leptos context providers and page-level signals.

pub mod auth_card;
pub mod input_field;
pub mod toast_stack;
