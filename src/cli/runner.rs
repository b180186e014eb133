//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, Payload};
use crate::client::{Collected, NetSuiteClient};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::types::JsonValue;
use serde_json::{json, Value};
use std::fs;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = NetSuiteClient::new(&config)?;
        info!("Using account {} ({})", config.account_id, config.base_url());

        let output = self.dispatch(&client).await?;
        println!("{}", self.render(&output)?);
        Ok(())
    }

    /// Execute the subcommand and return its JSON result
    pub async fn dispatch(&self, client: &NetSuiteClient) -> Result<Value> {
        match &self.cli.command {
            Commands::List { record_type, limit } => {
                let collected = client.list_records(record_type, *limit).await;
                self.finish(collected)
            }
            Commands::Dataset { dataset_id, limit } => {
                let collected = client.fetch_dataset(dataset_id, Some(*limit)).await;
                self.finish(collected)
            }
            Commands::Query { query, limit } => {
                let collected = client.run_suiteql(query, Some(*limit)).await;
                self.finish(collected)
            }
            Commands::Get { record_type, id } => {
                let record = client.get_record(record_type, id).await?;
                Ok(Value::Object(record))
            }
            Commands::Create {
                record_type,
                payload,
            } => {
                let body = read_payload(payload)?;
                let outcome = client.create_record(record_type, &body).await?;
                Ok(Value::Object(outcome.into_record()))
            }
            Commands::Update {
                record_type,
                id,
                payload,
            } => {
                let body = read_payload(payload)?;
                let outcome = client.update_record(record_type, id, &body).await?;
                Ok(Value::Object(outcome.into_record()))
            }
            Commands::Delete { record_type, id } => {
                client.delete_record(record_type, id).await?;
                Ok(json!({ "deleted": true, "record_type": record_type, "id": id }))
            }
        }
    }

    /// Resolve configuration from `--config` or the environment
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => ClientConfig::from_file(path),
            None => ClientConfig::from_env(&self.cli.env_prefix),
        }
    }

    /// Apply the truncation policy to a paginated result
    fn finish(&self, collected: Collected) -> Result<Value> {
        let records = if self.cli.strict {
            collected.into_result()?
        } else {
            if let Some(e) = &collected.stopped {
                warn!(
                    "Returning {} records from {} pages; fetch stopped early: {e}",
                    collected.len(),
                    collected.pages
                );
            }
            collected.into_records()
        };
        Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
    }

    /// Serialize the result in the requested format
    fn render(&self, value: &Value) -> Result<String> {
        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Jsonl => match value {
                Value::Array(items) => items
                    .iter()
                    .map(serde_json::to_string)
                    .collect::<std::result::Result<Vec<_>, _>>()?
                    .join("\n"),
                other => serde_json::to_string(other)?,
            },
        })
    }
}

/// Parse the JSON body given inline or by file
fn read_payload(payload: &Payload) -> Result<JsonValue> {
    let text = match (&payload.data, &payload.data_file) {
        (Some(data), _) => data.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => return Err(Error::config("Provide --data or --data-file")),
    };
    let body: JsonValue = serde_json::from_str(&text)?;
    if !body.is_object() {
        return Err(Error::invalid_value("data", "expected a JSON object"));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpClient, HttpClientConfig};
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["netsuite-rest"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn client_for(server: &MockServer) -> NetSuiteClient {
        let config = HttpClientConfig::builder().base_url(server.uri()).build();
        NetSuiteClient::from_http(HttpClient::with_config(config).unwrap())
    }

    async fn truncated_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/rest/record/v1/account"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": "1"}],
                "hasMore": true
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/services/rest/record/v1/account"))
            .and(query_param("offset", "1"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_list_returns_partial_by_default() {
        let server = truncated_server().await;
        let value = runner(&["list", "account"])
            .dispatch(&client_for(&server))
            .await
            .unwrap();
        assert_eq!(value, json!([{"id": "1"}]));
    }

    #[tokio::test]
    async fn test_list_strict_fails_on_truncation() {
        let server = truncated_server().await;
        let err = runner(&["--strict", "list", "account"])
            .dispatch(&client_for(&server))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_create_from_inline_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/rest/record/v1/customer"))
            .and(body_json(json!({"companyName": "Acme"})))
            .respond_with(
                ResponseTemplate::new(204)
                    .insert_header("Location", "/services/rest/record/v1/customer/4821"),
            )
            .mount(&server)
            .await;

        let value = runner(&["create", "customer", "--data", r#"{"companyName":"Acme"}"#])
            .dispatch(&client_for(&server))
            .await
            .unwrap();
        assert_eq!(value, json!({"id": "4821"}));
    }

    #[tokio::test]
    async fn test_delete_reports_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/services/rest/record/v1/customer/5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let value = runner(&["delete", "customer", "5"])
            .dispatch(&client_for(&server))
            .await
            .unwrap();
        assert_eq!(value["deleted"], true);
        assert_eq!(value["id"], "5");
    }

    #[test]
    fn test_read_payload_rejects_non_object() {
        let payload = Payload {
            data: Some("[1, 2]".to_string()),
            data_file: None,
        };
        assert!(matches!(
            read_payload(&payload),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_read_payload_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"email": "ap@example.com"}"#).unwrap();
        let payload = Payload {
            data: None,
            data_file: Some(file.path().to_path_buf()),
        };
        assert_eq!(
            read_payload(&payload).unwrap(),
            json!({"email": "ap@example.com"})
        );
    }

    #[test]
    fn test_render_jsonl() {
        let runner = runner(&["-f", "jsonl", "list", "customer"]);
        let rendered = runner.render(&json!([{"id": "1"}, {"id": "2"}])).unwrap();
        assert_eq!(rendered, "{\"id\":\"1\"}\n{\"id\":\"2\"}");
    }
}
