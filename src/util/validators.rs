//! Field validation rules for the auth forms.
//!
//! DESIGN
//! ======
//! `password_error` is the canonical password rule set; `is_valid_password`
//! is the boolean form of the same predicate and is derived from it so the
//! two can never diverge on edge cases. All checks are total functions over
//! arbitrary strings.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

/// Characters the password policy accepts as "special".
const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// True iff `s` looks like `local@domain.tld`: no whitespace, exactly one
/// `@` with a non-empty local part, and a `.` in the domain with at least
/// one character on each side.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// First violated password rule, in priority order, or `None` when the
/// password passes. The length boundary is strictly greater than six,
/// counted in Unicode scalar values rather than bytes or UTF-16 units: a
/// six-character password is always rejected, a seven-character one passes
/// the length rule.
pub fn password_error(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        return Some("Password is required");
    }
    if s.chars().count() <= 6 {
        return Some("Password must be more than 6 characters");
    }
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    if !s.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Password must contain at least one special character");
    }
    None
}

/// Boolean form of [`password_error`].
pub fn is_valid_password(s: &str) -> bool {
    password_error(s).is_none()
}

/// Signup username rule: required, at least 3 characters after trimming.
pub fn username_error(s: &str) -> Option<&'static str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Some("Username is required")
    } else if trimmed.chars().count() < 3 {
        Some("Username must be at least 3 characters")
    } else {
        None
    }
}

/// Email format rule for fields that are known to be email addresses.
pub fn email_error(s: &str) -> Option<&'static str> {
    if is_valid_email(s) {
        None
    } else {
        Some("Please enter a valid email address")
    }
}

/// Email rule for the forgot-password form, which reports emptiness before
/// a format problem.
pub fn required_email_error(s: &str) -> Option<&'static str> {
    if s.trim().is_empty() {
        Some("Email is required")
    } else {
        email_error(s)
    }
}

/// OTP rule: required, exactly 6 characters after trimming.
pub fn otp_error(s: &str) -> Option<&'static str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Some("OTP is required")
    } else if trimmed.chars().count() != 6 {
        Some("OTP must be 6 digits")
    } else {
        None
    }
}

/// Cross-field rule: the confirmation must equal the password exactly.
/// Independent of the password policy check, so two equal empty strings
/// produce no confirmation error even though the password itself fails.
pub fn confirm_password_error(password: &str, confirm: &str) -> Option<&'static str> {
    if password == confirm {
        None
    } else {
        Some("Passwords do not match")
    }
}
