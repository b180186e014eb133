//! Common types used throughout the client
//!
//! Shared type definitions, type aliases and vendor constants.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A vendor record: an opaque key-value mapping
pub type Record = serde_json::Map<String, JsonValue>;

// ============================================================================
// Vendor Constants
// ============================================================================

/// Host suffix for SuiteTalk REST services
pub const HOST_SUFFIX: &str = "suitetalk.api.netsuite.com";

/// Path prefix of the record service
pub const RECORD_PATH: &str = "/services/rest/record/v1";

/// Path prefix of the query service
pub const QUERY_PATH: &str = "/services/rest/query/v1";

/// Default page size for dataset and SuiteQL queries
pub const DEFAULT_QUERY_LIMIT: u32 = 1000;

// ============================================================================
// Record Identifier
// ============================================================================

/// Vendor-assigned record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Recover an identifier from a `Location` header value
    ///
    /// Takes the last `/`-delimited segment after trailing slashes are
    /// stripped. Returns `None` when nothing is left.
    pub fn from_location(location: &str) -> Option<Self> {
        location
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(Self::new)
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// One page of a paginated collection or query response
///
/// Every field defaults when the vendor leaves it out or sends `null`, so a
/// body without `items` reads as an empty page and a missing or null
/// `hasMore` reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Records on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Record>,
    /// Vendor continuation flag
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    /// Number of items on this page, as reported by the vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Offset of this page, as reported by the vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Total size of the result set, when the vendor reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_from_location() {
        let id = RecordId::from_location(
            "https://123.suitetalk.api.netsuite.com/services/rest/record/v1/customer/4821",
        );
        assert_eq!(id, Some(RecordId::new("4821")));
    }

    #[test]
    fn test_record_id_from_location_trailing_slash() {
        let id = RecordId::from_location("/services/rest/record/v1/vendor/77/");
        assert_eq!(id.map(|i| i.to_string()), Some("77".to_string()));
    }

    #[test]
    fn test_record_id_from_empty_location() {
        assert_eq!(RecordId::from_location(""), None);
        assert_eq!(RecordId::from_location("///"), None);
    }

    #[test]
    fn test_record_id_serializes_as_string() {
        let id = RecordId::from(42u64);
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
    }

    #[test]
    fn test_page_response_defaults() {
        let page: PageResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert!(page.total_results.is_none());
    }

    #[test]
    fn test_page_response_null_fields_default() {
        let page: PageResponse =
            serde_json::from_value(json!({ "items": null, "hasMore": null })).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_response_wire_names() {
        let page: PageResponse = serde_json::from_value(json!({
            "items": [{"id": "1"}, {"id": "2"}],
            "hasMore": true,
            "count": 2,
            "offset": 0,
            "totalResults": 9
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.total_results, Some(9));
    }
}
