//! HTTP transport for the remote authority.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the remote authority is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto one [`RequestError`] variant so callers can react
//! to transport loss, server rejection, and undecodable bodies separately.
//! The transport never touches the credential store beyond the read that
//! attaches the bearer header; session transitions stay with the callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use crate::state::credentials::CredentialStore;

/// HTTP method of a [`RequestSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A planned outbound request: everything except the bearer header, which is
/// read from the credential store immediately before dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl RequestSpec {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_owned(),
            body: Some(body),
        }
    }
}

/// Failure surface of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Transport-level failure; no response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
    /// A response arrived but did not decode into the expected shape.
    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

impl RequestError {
    /// True when the server reported the credential itself as invalid.
    #[must_use]
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::ServerRejected { status: 401 | 403, .. })
    }
}

/// `Authorization` header value to attach for the stored token, if any.
///
/// Absence of a token is not an error: login/register dispatch bare.
#[must_use]
pub fn authorization_for(store: &CredentialStore) -> Option<String> {
    store.read().map(|token| format!("Bearer {token}"))
}

/// Map a non-success response onto [`RequestError::ServerRejected`].
///
/// The server's `message` body field is surfaced verbatim when present;
/// otherwise a plain status fallback is used.
#[must_use]
pub fn rejection(status: u16, body: &str) -> RequestError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"));
    RequestError::ServerRejected { status, message }
}

/// Send `spec`, attaching the stored token as a bearer header when present,
/// and return the decoded JSON success body.
///
/// # Errors
///
/// Returns a [`RequestError`] for transport failures, non-success statuses,
/// and undecodable bodies.
pub async fn send_json(
    store: &CredentialStore,
    spec: RequestSpec,
) -> Result<serde_json::Value, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match spec.method {
            Method::Get => Request::get(&spec.path),
            Method::Post => Request::post(&spec.path),
        };
        let builder = match authorization_for(store) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };
        let resp = match spec.body {
            // `.json` also declares `Content-Type: application/json`.
            Some(body) => builder
                .json(&body)
                .map_err(|e| RequestError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| RequestError::Network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status, &body));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| RequestError::MalformedResponse(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| RequestError::MalformedResponse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, spec);
        Err(RequestError::Network("not available on server".to_owned()))
    }
}

/// [`send_json`] plus typed decoding of the success body.
///
/// # Errors
///
/// As [`send_json`]; a body that is valid JSON but not a `T` yields
/// [`RequestError::MalformedResponse`].
pub async fn send_as<T: DeserializeOwned>(
    store: &CredentialStore,
    spec: RequestSpec,
) -> Result<T, RequestError> {
    let value = send_json(store, spec).await?;
    serde_json::from_value(value).map_err(|e| RequestError::MalformedResponse(e.to_string()))
}
