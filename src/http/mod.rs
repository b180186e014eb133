//! HTTP client module
//!
//! Provides the transport used by every vendor call.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths are resolved against the account host
//! - **Request signing**: every request passes through the auth module
//! - **Raw status**: `send` hands back any status for the caller to interpret

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
