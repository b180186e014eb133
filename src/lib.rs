// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # netsuite-rest
//!
//! A small client for the NetSuite SuiteTalk REST services: record CRUD,
//! SuiteAnalytics datasets and SuiteQL, with offset pagination and OAuth 1.0a
//! token-based authentication.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use netsuite_rest::{ClientConfig, NetSuiteClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env("NS")?;
//!     let client = NetSuiteClient::new(&config)?;
//!
//!     // Every vendor, following hasMore
//!     let vendors = client.list_records("vendor", None).await;
//!     if let Some(e) = &vendors.stopped {
//!         eprintln!("only got {} vendors: {e}", vendors.len());
//!     }
//!
//!     // SuiteQL, 1000 rows per page
//!     let rows = client
//!         .run_suiteql("SELECT id, entityid FROM customer", None)
//!         .await
//!         .into_result()?;
//!
//!     // Single record
//!     let created = client
//!         .create_record("customer", &serde_json::json!({ "companyName": "Acme" }))
//!         .await?;
//!     println!("created {:?}, {} rows", created.id(), rows.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     NetSuiteClient                       │
//! │  list_records  fetch_dataset  run_suiteql   → Collected  │
//! │  get/create/update/delete_record            → Result<_>  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────┬────────────┴──────────┬──────────────────┐
//! │     Auth      │         HTTP          │    Paginate      │
//! ├───────────────┼───────────────────────┼──────────────────┤
//! │ OAuth 1.0a    │ GET/POST/PATCH/DELETE │ hasMore + items  │
//! │ HMAC-SHA256   │ Base URL, timeout     │ hasMore + limit  │
//! │ per request   │ Raw or checked status │ short page       │
//! └───────────────┴───────────────────────┴──────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
#[allow(missing_docs)]
pub mod error;

/// Common types and vendor constants
pub mod types;

/// OAuth 1.0a token-based authentication
pub mod auth;

/// HTTP transport with per-request signing
pub mod http;

/// Pagination strategies
pub mod pagination;

/// The NetSuite client and its operations
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Collected, CreateOutcome, NetSuiteClient, UpdateOutcome};
pub use config::ClientConfig;
pub use error::{Degrade, Error, Result};
pub use types::{PageResponse, Record, RecordId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
