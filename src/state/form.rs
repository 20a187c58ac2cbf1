//! Parameterized form controller shared by every auth page.
//!
//! DESIGN
//! ======
//! One controller type takes a per-page field schema instead of four
//! near-identical hand-written state machines. Validators see the whole
//! form so cross-field rules (confirm password) can compare values.
//! Errors are cleared eagerly on edit but only recomputed on submit.
//! The submit lifecycle lives here as well: [`FormState::try_begin_submit`]
//! is the single gate every page submit handler goes through, so the
//! re-entrancy rule is enforced in one place.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

/// A named form field plus the rule that validates it.
pub struct FieldSpec {
    pub name: &'static str,
    pub validate: fn(&FormState) -> Option<String>,
}

/// Transient per-page form state: field values, field errors, and the
/// submission flags. Created fresh per page render and never persisted.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: HashMap<&'static str, String>,
    errors: HashMap<&'static str, String>,
    /// Re-entrancy guard: true while a submission request is in flight.
    pub submitting: bool,
    /// Locks the forgot-password form after its first successful submit.
    pub submitted: bool,
}

impl FormState {
    /// Current value for `name`, or `""` when the field was never edited.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Recorded error for `name`, if any. An absent entry means valid.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Number of recorded field errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Store a new value for `name`, eagerly clearing any recorded error
    /// for that field. The field is not re-validated until the next submit.
    pub fn set_field(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
        self.errors.remove(name);
    }

    /// Run every field in `schema` through its validator, rebuilding the
    /// error map wholesale. Returns true iff the form is valid. Synchronous
    /// and side-effect free beyond the error map.
    pub fn validate_all(&mut self, schema: &[FieldSpec]) -> bool {
        let mut errors = HashMap::new();
        for field in schema {
            if let Some(message) = (field.validate)(self) {
                errors.insert(field.name, message);
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Begin a submission attempt. Refuses while one is already in flight
    /// or after the `submitted` lock is set, leaving the form untouched;
    /// otherwise validates every field and marks the form in flight.
    /// Returns true iff the caller may issue the request.
    pub fn try_begin_submit(&mut self, schema: &[FieldSpec]) -> bool {
        if self.submitting || self.submitted {
            return false;
        }
        if !self.validate_all(schema) {
            return false;
        }
        self.submitting = true;
        true
    }

    /// End a submission attempt, whatever its outcome. The `submitted`
    /// lock, when set, survives.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
