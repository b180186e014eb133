//! Pagination strategy implementations
//!
//! Each strategy handles one of the vendor's pagination patterns.

use super::types::{offset_params, Advance, NextPage, PaginationState, Paginator};
use crate::types::PageResponse;
use std::collections::BTreeMap;

// ============================================================================
// hasMore Pagination
// ============================================================================

/// Offset pagination driven by the vendor's `hasMore` flag
///
/// Used by record collections (`?offset=N`) and dataset results
/// (`?limit=L&offset=N`). The two endpoints advance differently: record
/// collections move by the items received, dataset results by the fixed
/// limit.
///
/// NOTE: the fixed-limit advance assumes every page is full. If the vendor
/// ever returns a short page with `hasMore: true`, items are skipped. Kept
/// as-is; both behaviors are pinned in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasMorePaginator {
    /// Page size sent as `limit`, if any
    pub limit: Option<u32>,
    /// Offset advancement rule
    pub advance: Advance,
}

impl HasMorePaginator {
    /// Advance by the number of items each page held
    pub fn by_received(limit: Option<u32>) -> Self {
        Self {
            limit,
            advance: Advance::Received,
        }
    }

    /// Advance by `limit` after every page
    pub fn by_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            advance: Advance::Fixed(limit),
        }
    }
}

impl Paginator for HasMorePaginator {
    fn initial_params(&self, state: &PaginationState) -> BTreeMap<String, String> {
        offset_params(state, self.limit)
    }

    fn process_response(&self, page: &PageResponse, state: &mut PaginationState) -> NextPage {
        let received = page.items.len();
        state.record_page(received);

        if !page.has_more {
            state.mark_done();
            return NextPage::Done;
        }

        let step = match self.advance {
            Advance::Received => received as u64,
            Advance::Fixed(limit) => u64::from(limit),
        };
        state.add_offset(step);

        NextPage::with_params(offset_params(state, self.limit))
    }
}

// ============================================================================
// Short Page Pagination
// ============================================================================

/// Offset pagination for endpoints with no end-of-data flag (SuiteQL)
///
/// Keeps going while a page holds at least `limit` items and advances by
/// `limit`. A limit of zero never terminates on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortPagePaginator {
    /// Page size sent as `limit`
    pub limit: u32,
}

impl ShortPagePaginator {
    /// Create a new short page paginator
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Paginator for ShortPagePaginator {
    fn initial_params(&self, state: &PaginationState) -> BTreeMap<String, String> {
        offset_params(state, Some(self.limit))
    }

    fn process_response(&self, page: &PageResponse, state: &mut PaginationState) -> NextPage {
        let received = page.items.len();
        state.record_page(received);

        if received < self.limit as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(u64::from(self.limit));
        NextPage::with_params(offset_params(state, Some(self.limit)))
    }
}
