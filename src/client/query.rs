//! Query service operations: dataset results and SuiteQL

use super::outcome::Collected;
use super::session::{dataset_path, suiteql_path, NetSuiteClient};
use crate::http::RequestConfig;
use crate::pagination::{HasMorePaginator, ShortPagePaginator};
use crate::types::DEFAULT_QUERY_LIMIT;
use reqwest::Method;
use serde_json::json;

impl NetSuiteClient {
    /// Fetch every row of a SuiteAnalytics dataset
    ///
    /// Follows `hasMore`, advancing the offset by `limit` (default 1000)
    /// after each page regardless of how many rows the page held.
    pub async fn fetch_dataset(&self, dataset_id: &str, limit: Option<u32>) -> Collected {
        let paginator = HasMorePaginator::by_limit(limit.unwrap_or(DEFAULT_QUERY_LIMIT));
        self.paginate(
            Method::GET,
            &dataset_path(dataset_id),
            RequestConfig::new(),
            &paginator,
        )
        .await
    }

    /// Run a SuiteQL query and fetch every row
    ///
    /// The query must not carry its own LIMIT/OFFSET; paging goes through
    /// query parameters. The endpoint has no end flag, so the loop stops on
    /// the first page shorter than `limit` (default 1000).
    pub async fn run_suiteql(&self, query: &str, limit: Option<u32>) -> Collected {
        let paginator = ShortPagePaginator::new(limit.unwrap_or(DEFAULT_QUERY_LIMIT));
        let template = RequestConfig::new()
            .header("Prefer", "transient")
            .json(json!({ "q": query }));
        self.paginate(Method::POST, &suiteql_path(), template, &paginator)
            .await
    }
}
