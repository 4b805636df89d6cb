use super::*;

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn authorization_for_formats_stored_token() {
    let store = CredentialStore::default();
    store.write("tok_abc");
    assert_eq!(authorization_for(&store), Some("Bearer tok_abc".to_owned()));
}

#[test]
fn authorization_for_is_absent_without_a_token() {
    let store = CredentialStore::default();
    assert_eq!(authorization_for(&store), None);
}

// =============================================================
// Request specs
// =============================================================

#[test]
fn get_spec_carries_no_body() {
    let spec = RequestSpec::get("/api/auth/me");
    assert_eq!(spec.method, Method::Get);
    assert_eq!(spec.path, "/api/auth/me");
    assert_eq!(spec.body, None);
}

#[test]
fn post_spec_carries_the_payload() {
    let spec = RequestSpec::post("/api/auth/login", serde_json::json!({ "email": "a@b" }));
    assert_eq!(spec.method, Method::Post);
    assert_eq!(spec.body, Some(serde_json::json!({ "email": "a@b" })));
}

// =============================================================
// Rejection mapping
// =============================================================

#[test]
fn rejection_surfaces_the_server_message_verbatim() {
    let err = rejection(401, r#"{"message":"Invalid email or password"}"#);
    assert_eq!(
        err,
        RequestError::ServerRejected {
            status: 401,
            message: "Invalid email or password".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn rejection_falls_back_on_unstructured_bodies() {
    let err = rejection(502, "upstream exploded");
    assert_eq!(
        err,
        RequestError::ServerRejected {
            status: 502,
            message: "request failed: 502".to_owned(),
        }
    );
}

#[test]
fn rejection_falls_back_when_message_is_not_a_string() {
    let err = rejection(500, r#"{"message":42}"#);
    assert_eq!(
        err,
        RequestError::ServerRejected {
            status: 500,
            message: "request failed: 500".to_owned(),
        }
    );
}

// =============================================================
// Auth-rejection classification
// =============================================================

#[test]
fn unauthorized_and_forbidden_are_auth_rejections() {
    for status in [401, 403] {
        let err = RequestError::ServerRejected {
            status,
            message: "no".to_owned(),
        };
        assert!(err.is_auth_rejected(), "status {status}");
    }
}

#[test]
fn other_failures_are_not_auth_rejections() {
    assert!(
        !RequestError::ServerRejected {
            status: 500,
            message: "boom".to_owned(),
        }
        .is_auth_rejected()
    );
    assert!(!RequestError::Network("offline".to_owned()).is_auth_rejected());
    assert!(!RequestError::MalformedResponse("bad json".to_owned()).is_auth_rejected());
}
