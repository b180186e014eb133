//! The NetSuite client and its shared request loop

use super::outcome::Collected;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{NextPage, PaginationState, Paginator};
use crate::types::{PageResponse, Record, QUERY_PATH, RECORD_PATH};
use reqwest::{Method, Response, StatusCode};
use tracing::{debug, warn};

/// Client for the SuiteTalk REST record and query services
///
/// Built once from a `ClientConfig` and shared by reference. It holds no
/// mutable state, so concurrent calls from separate tasks are independent.
#[derive(Debug)]
pub struct NetSuiteClient {
    http: HttpClient,
    max_pages: Option<usize>,
}

impl NetSuiteClient {
    /// Create a signed client for the configured account
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        Ok(Self {
            http,
            max_pages: config.max_pages,
        })
    }

    /// Wrap an already configured HTTP client
    pub fn from_http(http: HttpClient) -> Self {
        Self {
            http,
            max_pages: None,
        }
    }

    /// Cap paginated fetches at `max_pages` pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Run a paginated request until the paginator is done or a page fails
    pub(super) async fn paginate(
        &self,
        method: Method,
        path: &str,
        template: RequestConfig,
        paginator: &dyn Paginator,
    ) -> Collected {
        let mut state = PaginationState::new();
        let mut collected = Collected::default();
        let mut params = paginator.initial_params(&state);

        loop {
            if let Some(max_pages) = self.max_pages {
                if state.pages >= max_pages {
                    warn!("Stopping {path} after {max_pages} pages (offset {})", state.offset);
                    collected.stopped = Some(Error::PageLimitReached { max_pages });
                    break;
                }
            }

            collected.offsets.push(state.offset);
            let config = template.clone().queries(params);

            let page = match self.fetch_page(method.clone(), path, config).await {
                Ok(page) => page,
                Err(e) => {
                    warn!("Failed to fetch {path} (offset {}): {e}", state.offset);
                    collected.stopped = Some(e);
                    break;
                }
            };

            debug!(
                "Fetched {} items from {path} at offset {} (hasMore: {}, total: {:?})",
                page.items.len(),
                state.offset,
                page.has_more,
                page.total_results
            );

            let next = paginator.process_response(&page, &mut state);
            collected.records.extend(page.items);
            collected.pages = state.pages;

            match next {
                NextPage::Continue { query_params } => params = query_params,
                NextPage::Done => break,
            }
        }

        collected
    }

    /// Issue one page request; anything but 200 with a decodable body fails
    async fn fetch_page(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<PageResponse> {
        let response = self.http.send(method, path, config).await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::decode(format!("Invalid page body: {e}")))
    }

    /// Send a single-record request, logging transport failures
    pub(super) async fn send_logged(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        self.http
            .send(method.clone(), path, config)
            .await
            .inspect_err(|e| warn!("{method} {path} failed: {e}"))
    }
}

/// `/services/rest/record/v1/{type}[/{id}]`
pub(super) fn record_path(record_type: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!(
            "{RECORD_PATH}/{}/{}",
            urlencoding::encode(record_type),
            urlencoding::encode(id)
        ),
        None => format!("{RECORD_PATH}/{}", urlencoding::encode(record_type)),
    }
}

/// `/services/rest/query/v1/dataset/{id}/result`
pub(super) fn dataset_path(dataset_id: &str) -> String {
    format!(
        "{QUERY_PATH}/dataset/{}/result",
        urlencoding::encode(dataset_id)
    )
}

/// `/services/rest/query/v1/suiteql`
pub(super) fn suiteql_path() -> String {
    format!("{QUERY_PATH}/suiteql")
}

/// Decode a record body; an empty body reads as an empty record
pub(super) async fn read_record(response: Response) -> Result<Record> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Record::new());
    }
    serde_json::from_str(&body).map_err(|e| Error::decode(format!("Invalid record body: {e}")))
}

/// Turn an unexpected response into an error, logging status and body
pub(super) async fn status_error(action: &str, response: Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    warn!("{action} failed: {status}");
    if !body.is_empty() {
        warn!("{body}");
    }
    Error::http_status(status, body)
}
