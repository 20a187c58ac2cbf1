//! Toast notification state and scheduling.
//!
//! DESIGN
//! ======
//! The stack itself is plain data so push/dismiss stay natively testable;
//! [`show_toast`] layers the reactive signal and the auto-dismiss timer on
//! top. Toasts are dismissed by time only; there is no manual dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::util::schedule;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 3000;

/// Severity levels for toast notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier class for the toast container.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// The toast stack. Newest toasts append at the end; ids are unique per
/// stack instance so timed dismissal never removes the wrong entry.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: String, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message, severity });
        id
    }

    /// Remove the toast with `id`, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Push a toast onto the shared stack and schedule its removal after
/// [`TOAST_DISMISS_MS`].
pub fn show_toast(state: RwSignal<ToastState>, message: impl Into<String>, severity: Severity) {
    let Some(id) = state.try_update(|s| s.push(message.into(), severity)) else {
        return;
    };
    schedule::after(TOAST_DISMISS_MS, move || {
        state.try_update(|s| s.dismiss(id));
    });
}
