use super::*;

// =============================================================
// schema
// =============================================================

#[test]
fn empty_login_form_reports_both_required_fields() {
    let mut form = FormState::default();
    assert!(!form.validate_all(SCHEMA));
    assert_eq!(form.error_count(), 2);
    assert_eq!(
        form.error("email_or_username"),
        Some("Email or username is required")
    );
    assert_eq!(form.error("password"), Some("Password is required"));
}

#[test]
fn login_does_not_apply_email_format_or_password_policy() {
    // A bare username and a weak password are both fine client-side.
    let mut form = FormState::default();
    form.set_field("email_or_username", "bob".to_owned());
    form.set_field("password", "x".to_owned());
    assert!(form.validate_all(SCHEMA));
}

// =============================================================
// payload
// =============================================================

#[test]
fn payload_maps_email_or_username_onto_email() {
    let mut form = FormState::default();
    form.set_field("email_or_username", "bob".to_owned());
    form.set_field("password", "abcdef1!".to_owned());

    let payload = login_payload(&form);
    assert_eq!(
        payload,
        LoginRequest {
            email: "bob".to_owned(),
            password: "abcdef1!".to_owned(),
        }
    );
}
