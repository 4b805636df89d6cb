use super::*;

// =============================================================
// Unauthorized
// =============================================================

#[test]
fn unauthorized_protected_path_redirects_to_login() {
    assert_eq!(redirect_target(false, HOME_PATH), Some(LOGIN_PATH));
    assert_eq!(redirect_target(false, "/courses"), Some(LOGIN_PATH));
}

#[test]
fn unauthorized_entry_screens_are_served() {
    assert_eq!(redirect_target(false, LOGIN_PATH), None);
    assert_eq!(redirect_target(false, REGISTER_PATH), None);
}

// =============================================================
// Authorized
// =============================================================

#[test]
fn authorized_entry_screens_redirect_home() {
    assert_eq!(redirect_target(true, LOGIN_PATH), Some(HOME_PATH));
    assert_eq!(redirect_target(true, REGISTER_PATH), Some(HOME_PATH));
}

#[test]
fn authorized_protected_paths_are_served() {
    assert_eq!(redirect_target(true, HOME_PATH), None);
    assert_eq!(redirect_target(true, "/courses"), None);
}
