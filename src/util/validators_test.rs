use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_minimal_valid_form() {
    assert!(is_valid_email("a@b.c"));
}

#[test]
fn email_typical_address_is_valid() {
    assert!(is_valid_email("user.name+tag@example.co.uk"));
}

#[test]
fn email_without_at_is_invalid() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a.b.c"));
}

#[test]
fn email_without_dot_after_at_is_invalid() {
    assert!(!is_valid_email("a@bc"));
    assert!(!is_valid_email("a.b@cd"));
}

#[test]
fn email_with_whitespace_is_invalid() {
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@b.c "));
    assert!(!is_valid_email("a@b.\tc"));
}

#[test]
fn email_with_empty_local_part_is_invalid() {
    assert!(!is_valid_email("@b.c"));
}

#[test]
fn email_with_double_at_is_invalid() {
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("a@b@c.d"));
}

#[test]
fn email_domain_dot_needs_chars_on_both_sides() {
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(is_valid_email("a@b.c.d"));
}

#[test]
fn email_empty_is_invalid() {
    assert!(!is_valid_email(""));
}

// =============================================================
// password_error — priority order
// =============================================================

#[test]
fn password_empty_reports_required() {
    assert_eq!(password_error(""), Some("Password is required"));
}

#[test]
fn password_short_reports_length_first() {
    // Length is checked before the digit/special rules.
    assert_eq!(
        password_error("a1!"),
        Some("Password must be more than 6 characters")
    );
}

#[test]
fn password_length_exactly_six_rejected_regardless_of_content() {
    assert_eq!(
        password_error("a1!b2@"),
        Some("Password must be more than 6 characters")
    );
}

#[test]
fn password_seven_chars_no_digit_reports_missing_number() {
    // Missing-number is checked before missing-special.
    assert_eq!(
        password_error("abcdefg"),
        Some("Password must contain at least one number")
    );
}

#[test]
fn password_seven_chars_no_special_reports_missing_special() {
    assert_eq!(
        password_error("abcdef1"),
        Some("Password must contain at least one special character")
    );
}

#[test]
fn password_seven_chars_with_digit_and_special_passes() {
    assert_eq!(password_error("abcdef1!"), None);
    assert_eq!(password_error("abcde1!"), None);
}

#[test]
fn password_length_counts_scalar_values_not_bytes() {
    // Six accented characters: twelve bytes, still six characters.
    assert_eq!(
        password_error("éééééé"),
        Some("Password must be more than 6 characters")
    );
    // Five astral-plane characters plus digit and special: seven scalar
    // values, so the length rule passes.
    assert_eq!(password_error("😀😀😀😀😀1!"), None);
}

#[test]
fn password_accepts_each_special_character() {
    for c in r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#.chars() {
        let candidate = format!("abcde1{c}");
        assert_eq!(password_error(&candidate), None, "special char {c:?}");
    }
}

#[test]
fn password_rejects_non_listed_special() {
    // A tilde is not in the special-character set.
    assert_eq!(
        password_error("abcdef1~"),
        Some("Password must contain at least one special character")
    );
}

// =============================================================
// is_valid_password — derived predicate stays consistent
// =============================================================

#[test]
fn bool_form_matches_message_form() {
    for candidate in ["", "a1!", "a1!b2@", "abcdefg", "abcdef1", "abcdef1!", "abcde1!"] {
        assert_eq!(
            is_valid_password(candidate),
            password_error(candidate).is_none(),
            "diverged on {candidate:?}"
        );
    }
}

// =============================================================
// username_error
// =============================================================

#[test]
fn username_empty_or_blank_reports_required() {
    assert_eq!(username_error(""), Some("Username is required"));
    assert_eq!(username_error("   "), Some("Username is required"));
}

#[test]
fn username_under_three_chars_reports_minimum() {
    assert_eq!(username_error("ab"), Some("Username must be at least 3 characters"));
    assert_eq!(username_error(" ab "), Some("Username must be at least 3 characters"));
}

#[test]
fn username_three_chars_passes() {
    assert_eq!(username_error("abc"), None);
}

// =============================================================
// email_error / required_email_error
// =============================================================

#[test]
fn email_error_reports_invalid_format() {
    assert_eq!(email_error("nope"), Some("Please enter a valid email address"));
    assert_eq!(email_error("a@b.c"), None);
}

#[test]
fn required_email_reports_empty_before_format() {
    assert_eq!(required_email_error(""), Some("Email is required"));
    assert_eq!(required_email_error("  "), Some("Email is required"));
    assert_eq!(required_email_error("nope"), Some("Please enter a valid email address"));
    assert_eq!(required_email_error("a@b.c"), None);
}

// =============================================================
// otp_error
// =============================================================

#[test]
fn otp_empty_reports_required() {
    assert_eq!(otp_error(""), Some("OTP is required"));
    assert_eq!(otp_error("  "), Some("OTP is required"));
}

#[test]
fn otp_wrong_length_reports_six_digits() {
    assert_eq!(otp_error("12345"), Some("OTP must be 6 digits"));
    assert_eq!(otp_error("1234567"), Some("OTP must be 6 digits"));
}

#[test]
fn otp_six_chars_passes() {
    assert_eq!(otp_error("123456"), None);
    assert_eq!(otp_error(" 123456 "), None);
}

// =============================================================
// confirm_password_error
// =============================================================

#[test]
fn confirm_mismatch_reports_error() {
    assert_eq!(
        confirm_password_error("abcdef1!", "abcdef1?"),
        Some("Passwords do not match")
    );
}

#[test]
fn confirm_equal_passes_even_when_both_empty() {
    assert_eq!(confirm_password_error("", ""), None);
    assert_eq!(confirm_password_error("abcdef1!", "abcdef1!"), None);
}
