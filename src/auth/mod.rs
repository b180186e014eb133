//! Authentication module
//!
//! Supports: none (local mocks) and OAuth 1.0a token-based authentication
//! signed with HMAC-SHA256.
//!
//! The `Authenticator` signs each request after it is built, so the
//! signature always covers the exact URL that goes on the wire.

mod authenticator;
mod types;

pub use authenticator::{authorization_header, signature_base_string, Authenticator};
pub use types::{AuthConfig, Credentials, OAUTH_VERSION, SIGNATURE_METHOD};
