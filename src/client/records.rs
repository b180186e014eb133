//! Record service operations: list, fetch, create, update, delete

use super::outcome::{Collected, CreateOutcome, UpdateOutcome};
use super::session::{read_record, record_path, status_error, NetSuiteClient};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::pagination::HasMorePaginator;
use crate::types::{Record, RecordId};
use reqwest::header::LOCATION;
use reqwest::Method;
use serde::Serialize;
use tracing::{info, warn};

impl NetSuiteClient {
    /// Fetch every record of a type, following `hasMore`
    ///
    /// The offset advances by the number of items each page held. `limit`
    /// is sent only when given; otherwise the vendor's default page size
    /// applies.
    pub async fn list_records(&self, record_type: &str, limit: Option<u32>) -> Collected {
        let paginator = HasMorePaginator::by_received(limit);
        self.paginate(
            Method::GET,
            &record_path(record_type, None),
            RequestConfig::new(),
            &paginator,
        )
        .await
    }

    /// Fetch one record by type and id (200 only)
    pub async fn get_record(&self, record_type: &str, id: &str) -> Result<Record> {
        let path = record_path(record_type, Some(id));
        let response = self
            .send_logged(Method::GET, &path, RequestConfig::new())
            .await?;

        if response.status().as_u16() == 200 {
            read_record(response).await
        } else {
            Err(status_error("Record fetch", response).await)
        }
    }

    /// Create a record
    ///
    /// The vendor either echoes the record (200/201) or answers 204 with
    /// the new record's URL in `Location`.
    pub async fn create_record<T>(&self, record_type: &str, payload: &T) -> Result<CreateOutcome>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        let response = self
            .send_logged(
                Method::POST,
                &record_path(record_type, None),
                RequestConfig::new().json(body),
            )
            .await?;

        match response.status().as_u16() {
            200 | 201 => {
                let outcome = CreateOutcome::Body(read_record(response).await?);
                info!(
                    "Record created: {record_type}/{}",
                    outcome.id().map(|id| id.to_string()).unwrap_or_default()
                );
                Ok(outcome)
            }
            204 => {
                let id = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(RecordId::from_location);
                match id {
                    Some(id) => {
                        info!("Record created (204): {record_type}/{id}");
                        Ok(CreateOutcome::Location(id))
                    }
                    None => {
                        warn!("Record created (204), but no Location header provided");
                        Ok(CreateOutcome::NoLocation)
                    }
                }
            }
            _ => Err(status_error("Record creation", response).await),
        }
    }

    /// Apply a partial update (PATCH) to a record
    pub async fn update_record<T>(
        &self,
        record_type: &str,
        id: &str,
        changes: &T,
    ) -> Result<UpdateOutcome>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(changes)?;
        let response = self
            .send_logged(
                Method::PATCH,
                &record_path(record_type, Some(id)),
                RequestConfig::new().json(body),
            )
            .await?;

        match response.status().as_u16() {
            200 | 201 => Ok(UpdateOutcome::Body(read_record(response).await?)),
            204 => {
                info!("Record {record_type}/{id} updated (204 No Content)");
                Ok(UpdateOutcome::NoContent)
            }
            _ => Err(status_error("Update", response).await),
        }
    }

    /// Delete a record (204 only)
    pub async fn delete_record(&self, record_type: &str, id: &str) -> Result<()> {
        let response = self
            .send_logged(
                Method::DELETE,
                &record_path(record_type, Some(id)),
                RequestConfig::new(),
            )
            .await?;

        if response.status().as_u16() == 204 {
            info!("Record {record_type}/{id} deleted");
            Ok(())
        } else {
            Err(status_error("Deletion", response).await)
        }
    }
}
