//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by all strategies.

use crate::types::PageResponse;
use std::collections::BTreeMap;

/// Query parameter carrying the cursor position
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these query parameters
    Continue {
        /// Query parameters to send with the next request
        query_params: BTreeMap<String, String>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(query_params: BTreeMap<String, String>) -> Self {
        Self::Continue { query_params }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// How the offset moves after a page that signals continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Move by the number of items the page actually held
    Received,
    /// Move by a fixed page size, whatever the page held
    Fixed(u32),
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset of the next request
    pub offset: u64,
    /// Pages processed so far
    pub pages: usize,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state (offset 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Add offset
    pub fn add_offset(&mut self, amount: u64) {
        self.offset += amount;
    }

    /// Count one processed page of `count` records
    pub fn record_page(&mut self, count: usize) {
        self.pages += 1;
        self.total_fetched += count as u64;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Get query parameters for the first request
    fn initial_params(&self, state: &PaginationState) -> BTreeMap<String, String>;

    /// Process a page and determine if there's a next one
    fn process_response(&self, page: &PageResponse, state: &mut PaginationState) -> NextPage;
}

/// Build `offset` (and `limit`, when set) parameters for a state
pub fn offset_params(state: &PaginationState, limit: Option<u32>) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert(OFFSET_PARAM.to_string(), state.offset.to_string());
    if let Some(limit) = limit {
        params.insert(LIMIT_PARAM.to_string(), limit.to_string());
    }
    params
}
