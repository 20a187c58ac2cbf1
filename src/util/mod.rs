//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! and pure rule sets (validators, gating) from page and component logic.

pub mod auth;
pub mod schedule;
pub mod session;
pub mod validators;
