//! Networking modules for the authentication HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire
//! schema. There is no client-side retry: every retry is a fresh
//! user-initiated submission.

pub mod api;
pub mod types;
