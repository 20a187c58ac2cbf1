//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` at the page or app
//! level, so the rule logic stays natively testable without a browser.

pub mod form;
pub mod toast;
