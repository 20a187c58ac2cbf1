//! Shared auth gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components must apply identical unauthenticated redirect
//! behavior, and must never reach for user fields that may be absent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::session;

/// Redirect to `/login` on mount whenever no session record is present.
/// The effect consults [`session::is_authenticated`] directly so the gate
/// decision always reflects what is in storage, not a captured snapshot.
pub fn install_unauth_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if !session::is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
