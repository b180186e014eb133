//! Authenticator implementation
//!
//! Signs outgoing requests with an OAuth 1.0a `Authorization` header
//! (RFC 5849, HMAC-SHA256). Every request gets a fresh nonce and timestamp.

use super::types::{AuthConfig, Credentials, OAUTH_VERSION, SIGNATURE_METHOD};
use crate::error::{Error, Result};
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request};
use sha2::Sha256;
use std::borrow::Cow;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

const NONCE_LEN: usize = 20;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a fully built request
    ///
    /// Signing happens after the request is built so the signature covers
    /// the final URL, query string included.
    pub fn apply(&self, request: &mut Request) -> Result<()> {
        match &self.config {
            AuthConfig::None => Ok(()),
            AuthConfig::TokenBased(credentials) => {
                let header = authorization_header(
                    credentials,
                    request.method(),
                    request.url(),
                    &generate_nonce(),
                    Utc::now().timestamp(),
                )?;
                let value = HeaderValue::from_str(&header)
                    .map_err(|e| Error::auth(format!("Invalid Authorization header: {e}")))?;
                request.headers_mut().insert(AUTHORIZATION, value);
                Ok(())
            }
        }
    }
}

/// Build the `Authorization: OAuth ...` header value for one request
pub fn authorization_header(
    credentials: &Credentials,
    method: &Method,
    url: &Url,
    nonce: &str,
    timestamp: i64,
) -> Result<String> {
    let timestamp = timestamp.to_string();
    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.token_id.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    let base = signature_base_string(method, url, &oauth_params);
    let signature = sign(
        &base,
        &credentials.consumer_secret,
        &credentials.token_secret,
    )?;
    oauth_params.push(("oauth_signature", signature.as_str()));
    oauth_params.sort_unstable();

    let mut parts = Vec::with_capacity(oauth_params.len() + 1);
    if let Some(realm) = credentials.realm() {
        parts.push(format!("realm=\"{}\"", encode(realm)));
    }
    for (key, value) in oauth_params {
        parts.push(format!("{key}=\"{}\"", encode(value)));
    }

    Ok(format!("OAuth {}", parts.join(", ")))
}

/// Build the signature base string: `METHOD&enc(base_uri)&enc(params)`
///
/// Parameters are the decoded query pairs of `url` plus the oauth
/// parameters, each percent-encoded, then sorted by name and value.
pub fn signature_base_string(method: &Method, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k).into_owned(), encode(&v).into_owned()))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned())),
        )
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str().to_uppercase(),
        encode(&base_uri(url)),
        encode(&normalized)
    )
}

/// Scheme, host, non-default port and path of a URL
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

/// HMAC-SHA256 over the base string, base64 encoded
fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| Error::auth(format!("Invalid signing key: {e}")))?;
    mac.update(base.as_bytes());
    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// RFC 3986 percent-encoding (unreserved characters pass through)
fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod nonce_tests {
    use super::*;

    #[test]
    fn test_nonce_shape() {
        let a = generate_nonce();
        let b = generate_nonce();
        assert_eq!(a.len(), NONCE_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
