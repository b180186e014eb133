//! Pagination module
//!
//! Supports: `hasMore`-flagged offset pages (advancing by items received or
//! by a fixed limit) and short-page detection for endpoints without a flag.
//!
//! # Overview
//!
//! A `Paginator` produces the query parameters for the first request, then
//! inspects each decoded page to decide whether to continue and with which
//! offset. The request loop itself lives in the client.

mod strategies;
mod types;

pub use strategies::{HasMorePaginator, ShortPagePaginator};
pub use types::{
    offset_params, Advance, NextPage, PaginationState, Paginator, LIMIT_PARAM, OFFSET_PARAM,
};
