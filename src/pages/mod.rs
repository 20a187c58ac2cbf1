//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its field schema, payload builder, and submit
//! orchestration, and delegates rendering details to `components`. The
//! shared form controller lives in `state::form`.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod signup;
