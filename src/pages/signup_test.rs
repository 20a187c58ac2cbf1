use super::*;

// =============================================================
// schema
// =============================================================

#[test]
fn empty_signup_form_yields_three_errors() {
    let mut form = FormState::default();
    assert!(!form.validate_all(SCHEMA));

    // Username, email, and password fail; the equal (empty) confirmation
    // does not.
    assert_eq!(form.error_count(), 3);
    assert_eq!(form.error("confirm_password"), None);
}

#[test]
fn signup_applies_full_password_policy() {
    let mut form = FormState::default();
    form.set_field("username", "bob".to_owned());
    form.set_field("email", "b@x.com".to_owned());
    form.set_field("password", "abcdef1".to_owned());
    form.set_field("confirm_password", "abcdef1".to_owned());

    assert!(!form.validate_all(SCHEMA));
    assert_eq!(
        form.error("password"),
        Some("Password must contain at least one special character")
    );
}

// =============================================================
// payload
// =============================================================

#[test]
fn payload_excludes_the_confirmation_field() {
    let mut form = FormState::default();
    form.set_field("username", "bob".to_owned());
    form.set_field("email", "b@x.com".to_owned());
    form.set_field("password", "abcdef1!".to_owned());
    form.set_field("confirm_password", "abcdef1!".to_owned());

    let payload = signup_payload(&form);
    assert_eq!(
        payload,
        SignupRequest {
            username: "bob".to_owned(),
            email: "b@x.com".to_owned(),
            password: "abcdef1!".to_owned(),
        }
    );
}
