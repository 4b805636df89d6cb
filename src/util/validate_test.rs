use super::*;

// =============================================================
// Login validation
// =============================================================

#[test]
fn valid_login_input_produces_no_errors() {
    let errors = validate_login("user@example.com", "secret1");
    assert!(errors.is_empty());
}

#[test]
fn empty_email_is_required() {
    let errors = validate_login("   ", "secret1");
    assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["plainaddress", "@example.com", "user@", "a@b@c", "user name@example.com"] {
        let errors = validate_login(email, "secret1");
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Invalid email format"),
            "email {email:?} should be rejected"
        );
    }
}

#[test]
fn domain_without_dot_is_accepted() {
    let errors = validate_login("user@localhost", "secret1");
    assert!(!errors.contains_key("email"));
}

#[test]
fn empty_password_is_required() {
    let errors = validate_login("user@example.com", "");
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("Password is required")
    );
}

#[test]
fn short_password_reports_minimum_length() {
    let errors = validate_login("user@example.com", "abc12");
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("Must be at least 6 characters")
    );
}

#[test]
fn password_at_minimum_length_is_accepted() {
    let errors = validate_login("user@example.com", "abc123");
    assert!(errors.is_empty());
}

// =============================================================
// Registration validation
// =============================================================

#[test]
fn valid_registration_input_produces_no_errors() {
    let errors = validate_registration("Alice", "alice@example.com", "secret1", "secret1");
    assert!(errors.is_empty());
}

#[test]
fn blank_name_is_required() {
    let errors = validate_registration("  ", "alice@example.com", "secret1", "secret1");
    assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
}

#[test]
fn empty_confirmation_is_required() {
    let errors = validate_registration("Alice", "alice@example.com", "secret1", "");
    assert_eq!(
        errors.get("confirmPassword").map(String::as_str),
        Some("Confirm your password")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let errors = validate_registration("Alice", "alice@example.com", "secret1", "secret2");
    assert_eq!(
        errors.get("confirmPassword").map(String::as_str),
        Some("Passwords do not match")
    );
}

#[test]
fn registration_collects_errors_across_fields() {
    let errors = validate_registration("", "bad-email", "abc", "xyz");
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
    assert!(errors.contains_key("confirmPassword"));
}
