use super::*;
use crate::net::http::Method;
use crate::net::types::Role;

#[test]
fn login_request_posts_credentials_to_the_login_endpoint() {
    let spec = login_request(&Credentials {
        email: "user@example.com".to_owned(),
        password: "secret1".to_owned(),
    });

    assert_eq!(spec.method, Method::Post);
    assert_eq!(spec.path, LOGIN_ENDPOINT);
    assert_eq!(
        spec.body,
        Some(serde_json::json!({
            "email": "user@example.com",
            "password": "secret1",
        }))
    );
}

#[test]
fn register_request_encodes_the_selected_role() {
    let spec = register_request(&RegisterProfile {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Teacher,
    });

    assert_eq!(spec.method, Method::Post);
    assert_eq!(spec.path, REGISTER_ENDPOINT);
    assert_eq!(
        spec.body,
        Some(serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret1",
            "role": "teacher",
        }))
    );
}

#[test]
fn me_endpoint_is_a_bare_get() {
    let spec = RequestSpec::get(ME_ENDPOINT);
    assert_eq!(spec.method, Method::Get);
    assert_eq!(spec.path, "/api/auth/me");
    assert_eq!(spec.body, None);
}
