//! The login and registration exchanges against the remote authority.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both operations perform the HTTP exchange and hand the issued token back
//! to the caller; committing it into the session is a separate step owned by
//! the submitting page. That keeps "perform exchange" and "commit session"
//! independently testable.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use crate::net::http::{self, RequestError, RequestSpec};
use crate::net::types::{AuthSuccess, Credentials, RegisterProfile, UserSummary};
use crate::state::credentials::CredentialStore;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const ME_ENDPOINT: &str = "/api/auth/me";

fn login_request(credentials: &Credentials) -> RequestSpec {
    RequestSpec::post(
        LOGIN_ENDPOINT,
        serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
        }),
    )
}

fn register_request(profile: &RegisterProfile) -> RequestSpec {
    RequestSpec::post(
        REGISTER_ENDPOINT,
        serde_json::json!({
            "name": profile.name,
            "email": profile.email,
            "password": profile.password,
            "role": profile.role.as_str(),
        }),
    )
}

/// Exchange credentials for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Propagates the transport [`RequestError`] untouched; rejected credentials
/// arrive as [`RequestError::ServerRejected`].
pub async fn login(
    store: &CredentialStore,
    credentials: &Credentials,
) -> Result<AuthSuccess, RequestError> {
    http::send_as(store, login_request(credentials)).await
}

/// Create an account and receive a session token via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(
    store: &CredentialStore,
    profile: &RegisterProfile,
) -> Result<AuthSuccess, RequestError> {
    http::send_as(store, register_request(profile)).await
}

/// Fetch the account behind the stored token via `GET /api/auth/me`.
///
/// This is a session-assuming call: an auth rejection here means the stored
/// token is stale, and the caller should route the error through
/// `Session::note_rejection` before surfacing it.
///
/// # Errors
///
/// Propagates the transport [`RequestError`] untouched.
pub async fn fetch_me(store: &CredentialStore) -> Result<UserSummary, RequestError> {
    http::send_as(store, RequestSpec::get(ME_ENDPOINT)).await
}
