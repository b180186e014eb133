//! Typed results of client operations

use crate::error::{Error, Result};
use crate::types::{JsonValue, Record, RecordId};

/// Records gathered by a paginated fetch
///
/// A fetch never fails as a whole: when a page cannot be retrieved the
/// loop stops, keeps what it already has and records the reason in
/// `stopped`.
#[derive(Debug, Default)]
pub struct Collected {
    /// Items of every successful page, in fetch order
    pub records: Vec<Record>,
    /// Pages successfully processed
    pub pages: usize,
    /// Offset of every request issued, in order
    pub offsets: Vec<u64>,
    /// Why the loop ended early, if it did
    pub stopped: Option<Error>,
}

impl Collected {
    /// True when the vendor signalled the end of the result set
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }

    /// Number of records gathered
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was gathered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of requests issued, including a failed final one
    pub fn requests(&self) -> usize {
        self.offsets.len()
    }

    /// Strict view: the records, or the error that truncated them
    pub fn into_result(self) -> Result<Vec<Record>> {
        match self.stopped {
            Some(e) => Err(e),
            None => Ok(self.records),
        }
    }

    /// Lenient view: whatever was gathered, truncated or not
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Result of a successful record creation
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// 200/201 with the created record in the body
    Body(Record),
    /// 204 with the id taken from the `Location` header
    Location(RecordId),
    /// 204 without a `Location` header; the id cannot be known
    NoLocation,
}

impl CreateOutcome {
    /// Identifier of the created record, when obtainable
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Self::Body(record) => record.get("id").and_then(id_from_value),
            Self::Location(id) => Some(id.clone()),
            Self::NoLocation => None,
        }
    }

    /// Mapping view: the body, `{"id": ...}`, or `{}`
    pub fn into_record(self) -> Record {
        match self {
            Self::Body(record) => record,
            Self::Location(id) => {
                let mut record = Record::new();
                record.insert("id".to_string(), JsonValue::String(id.to_string()));
                record
            }
            Self::NoLocation => Record::new(),
        }
    }
}

/// Result of a successful record update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// 200/201 with the updated record in the body
    Body(Record),
    /// 204, no body
    NoContent,
}

impl UpdateOutcome {
    /// Mapping view: the body or `{}`
    pub fn into_record(self) -> Record {
        match self {
            Self::Body(record) => record,
            Self::NoContent => Record::new(),
        }
    }
}

fn id_from_value(value: &JsonValue) -> Option<RecordId> {
    match value {
        JsonValue::String(s) => Some(RecordId::new(s.as_str())),
        JsonValue::Number(n) => Some(RecordId::new(n.to_string())),
        _ => None,
    }
}
