pub mod errors;

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::forms::{FieldSchema, ValidationRequest, ValidationResponse};
use crate::services::config::RegistryConfig;

pub use errors::{ClientError, ClientResult};

/// Response from the attendance save endpoint. A missing `success` flag
/// deserializes as `false`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AttendanceSaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_marked: u32,
    #[serde(default)]
    pub error: Option<String>,
}

/// The network seam the widgets suspend on. One outstanding request per
/// component instance; no request is ever cancelled.
#[async_trait(?Send)]
pub trait RegistryApi {
    async fn fetch_schema(&self, url: &str) -> ClientResult<FieldSchema>;

    async fn validate_outcome(&self, request: &ValidationRequest)
        -> ClientResult<ValidationResponse>;

    async fn submit_attendance(
        &self,
        event_id: &str,
        entries: &BTreeMap<String, String>,
    ) -> ClientResult<AttendanceSaveResponse>;
}

/// reqwest-backed client for the registry endpoints.
#[derive(Clone)]
pub struct RegistryClient {
    http_client: Client,
    config: RegistryConfig,
}

impl RegistryClient {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RegistryApi for RegistryClient {
    #[instrument(skip(self), err)]
    async fn fetch_schema(&self, url: &str) -> ClientResult<FieldSchema> {
        let response = self.http_client.get(url).send().await?;
        let schema = response.json::<FieldSchema>().await?;
        info!(fields = schema.fields.len(), "fetched field schema");
        Ok(schema)
    }

    #[instrument(skip(self, request), err)]
    async fn validate_outcome(
        &self,
        request: &ValidationRequest,
    ) -> ClientResult<ValidationResponse> {
        let response = self
            .http_client
            .post(&self.config.validate_endpoint)
            .json(request)
            .send()
            .await?;
        Ok(response.json::<ValidationResponse>().await?)
    }

    #[instrument(skip(self, entries), err)]
    async fn submit_attendance(
        &self,
        event_id: &str,
        entries: &BTreeMap<String, String>,
    ) -> ClientResult<AttendanceSaveResponse> {
        let url = self.config.attendance_url(event_id);
        let response = self.http_client.post(&url).json(entries).send().await?;
        Ok(response.json::<AttendanceSaveResponse>().await?)
    }
}
