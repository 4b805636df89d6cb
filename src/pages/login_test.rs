use super::*;

#[test]
fn credentials_from_input_trims_the_email_only() {
    let credentials = credentials_from_input("  user@example.com  ", " secret1 ");
    assert_eq!(credentials.email, "user@example.com");
    assert_eq!(credentials.password, " secret1 ");
}

#[test]
fn password_input_type_toggles_visibility() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
