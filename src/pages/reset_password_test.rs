use super::*;

// =============================================================
// email_param — entry precondition
// =============================================================

#[test]
fn missing_query_parameter_is_rejected() {
    assert_eq!(email_param(None), None);
}

#[test]
fn empty_query_parameter_is_rejected() {
    assert_eq!(email_param(Some(String::new())), None);
}

#[test]
fn present_email_is_accepted_verbatim() {
    assert_eq!(
        email_param(Some("b@x.com".to_owned())),
        Some("b@x.com".to_owned())
    );
}

// =============================================================
// schema
// =============================================================

#[test]
fn empty_reset_form_reports_otp_and_password() {
    let mut form = FormState::default();
    assert!(!form.validate_all(SCHEMA));
    assert_eq!(form.error_count(), 2);
    assert_eq!(form.error("otp"), Some("OTP is required"));
    assert_eq!(form.error("password"), Some("Password is required"));
    assert_eq!(form.error("confirm_password"), None);
}

#[test]
fn short_otp_reports_six_digit_rule() {
    let mut form = FormState::default();
    form.set_field("otp", "123".to_owned());
    form.set_field("password", "abcdef1!".to_owned());
    form.set_field("confirm_password", "abcdef1!".to_owned());

    assert!(!form.validate_all(SCHEMA));
    assert_eq!(form.error("otp"), Some("OTP must be 6 digits"));
}

// =============================================================
// payload
// =============================================================

#[test]
fn payload_combines_query_email_with_form_fields() {
    let mut form = FormState::default();
    form.set_field("otp", "123456".to_owned());
    form.set_field("password", "abcdef1!".to_owned());
    form.set_field("confirm_password", "abcdef1!".to_owned());

    let payload = reset_payload("b@x.com", &form);
    assert_eq!(
        payload,
        ResetRequest {
            email: "b@x.com".to_owned(),
            otp: "123456".to_owned(),
            password: "abcdef1!".to_owned(),
        }
    );
}
