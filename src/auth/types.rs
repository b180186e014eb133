//! Auth configuration types
//!
//! Token-based authentication credentials and the runtime auth selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth signature method sent with every request
pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";

/// OAuth protocol version sent with every request
pub const OAUTH_VERSION: &str = "1.0";

/// Token-based authentication secrets
///
/// The consumer pair identifies the integration record, the token pair
/// identifies the access token issued to a user/role.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Integration consumer key
    pub consumer_key: String,
    /// Integration consumer secret
    pub consumer_secret: String,
    /// Access token id
    pub token_id: String,
    /// Access token secret
    pub token_secret: String,
    /// Account realm (defaults to the account id when omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
}

impl Credentials {
    /// Create credentials with an explicit realm
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token_id: impl Into<String>,
        token_secret: impl Into<String>,
        realm: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_id: token_id.into(),
            token_secret: token_secret.into(),
            realm: Some(realm.into()),
        }
    }

    /// Realm to place in the `Authorization` header
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// Names of required fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("token_id", &self.token_id),
            ("token_secret", &self.token_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("realm", &self.realm)
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication (local mocks)
    #[default]
    None,

    /// OAuth 1.0a token-based authentication, HMAC-SHA256 signed
    TokenBased(Credentials),
}
