//! Client-side form validation for the auth pages.
//!
//! DESIGN
//! ======
//! Validation is a pure function of the raw input: it produces a field ->
//! message mapping and never touches network or storage. Pages reject
//! invalid input here, so it never reaches the transport layer.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// Field name -> human-readable violation. Empty when the input is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate login form input.
#[must_use]
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors
}

/// Validate registration form input.
#[must_use]
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "Name is required".to_owned());
    }
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    if confirm_password.is_empty() {
        errors.insert("confirmPassword", "Confirm your password".to_owned());
    } else if confirm_password != password {
        errors.insert("confirmPassword", "Passwords do not match".to_owned());
    }
    errors
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".to_owned());
    } else if !email_shape_ok(email) {
        errors.insert("email", "Invalid email format".to_owned());
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required".to_owned());
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            format!("Must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
}

/// Structural email check: one `@` with a non-empty local part and domain,
/// and no whitespace. Deliverability is the server's concern.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
