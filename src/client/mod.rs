//! NetSuite REST client
//!
//! `NetSuiteClient` maps each operation onto the record and query services:
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | `list_records` | `GET record/v1/{type}?offset` | pages until `hasMore` is false |
//! | `fetch_dataset` | `GET query/v1/dataset/{id}/result?limit&offset` | pages until `hasMore` is false |
//! | `run_suiteql` | `POST query/v1/suiteql?limit&offset` | pages until a short page |
//! | `get_record` | `GET record/v1/{type}/{id}` | 200 |
//! | `create_record` | `POST record/v1/{type}` | 200/201 body, 204 `Location` |
//! | `update_record` | `PATCH record/v1/{type}/{id}` | 200/201 body, 204 |
//! | `delete_record` | `DELETE record/v1/{type}/{id}` | 204 |
//!
//! Calls are strictly sequential: a paginated fetch awaits each page before
//! requesting the next.

mod outcome;
mod query;
mod records;
mod session;

pub use outcome::{Collected, CreateOutcome, UpdateOutcome};
pub use session::NetSuiteClient;
