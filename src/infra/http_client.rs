use crate::app::ports::RemoteQueryPort;
use crate::error::RemoteQueryError;
use crate::observability::metrics;
use crate::types::RawRecord;
use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Client for the data catalog's SQL endpoint.
///
/// Each query is a single POST with the SQL in a multipart `sql` field. The
/// response envelope carries rows at `result.records`.
pub struct ReqwestQueryClient {
    client: reqwest::Client,
    query_url: String,
}

impl ReqwestQueryClient {
    pub fn new(query_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteQueryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nearby_services/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            query_url: query_url.into(),
        })
    }

    async fn send(&self, sql: &str) -> Result<Vec<RawRecord>, RemoteQueryError> {
        let form = Form::new().text("sql", sql.to_string());
        let resp = self.client.post(&self.query_url).multipart(form).send().await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            error!("HTTP error on data catalog request: status {}", status);
            log_error_from_body(&body);
            return Err(RemoteQueryError::Status {
                status: status.as_u16(),
            });
        }

        extract_records(&body)
    }
}

#[async_trait]
impl RemoteQueryPort for ReqwestQueryClient {
    async fn execute(&self, sql: &str) -> Result<Vec<RawRecord>, RemoteQueryError> {
        debug!("Making data catalog query: '{}'", sql);
        let t0 = Instant::now();

        match self.send(sql).await {
            Ok(records) => {
                metrics::remote::request_success(t0.elapsed().as_secs_f64(), records.len());
                info!("Data catalog query returned {} results", records.len());
                Ok(records)
            }
            Err(e) => {
                metrics::remote::request_error(error_kind(&e));
                error!("Error while attempting data catalog request: {}", e);
                Err(e)
            }
        }
    }
}

fn error_kind(e: &RemoteQueryError) -> &'static str {
    match e {
        RemoteQueryError::Transport(_) => "transport",
        RemoteQueryError::Status { .. } => "status",
        RemoteQueryError::Malformed { .. } => "malformed",
    }
}

/// Pull `result.records` out of a success envelope.
pub fn extract_records(body: &[u8]) -> Result<Vec<RawRecord>, RemoteQueryError> {
    let envelope: Value = serde_json::from_slice(body).map_err(|e| RemoteQueryError::Malformed {
        message: format!("body is not JSON: {e}"),
    })?;

    let records = envelope
        .get("result")
        .and_then(|r| r.get("records"))
        .and_then(Value::as_array)
        .ok_or_else(|| RemoteQueryError::Malformed {
            message: "missing result.records".into(),
        })?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| match record {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(RemoteQueryError::Malformed {
                message: format!("record {i} is not an object"),
            }),
        })
        .collect()
}

/// Best effort: log the catalog's `error` member from a failed response.
/// Never fails; an unreadable body is silently ignored.
fn log_error_from_body(body: &[u8]) {
    if let Ok(json) = serde_json::from_slice::<Value>(body) {
        if let Some(err) = json.get("error") {
            error!("Error from data catalog response body: \"{}\"", err);
        }
    }
}
