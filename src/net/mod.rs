//! Networking modules for the remote authority.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` performs the transport exchange and bearer-header injection,
//! `auth_api` defines the concrete auth operations, and `types` holds the
//! shared wire schema.

pub mod auth_api;
pub mod http;
pub mod types;
