//! Parse service client (reqwest)

use crate::error::Result;
use std::time::Duration;
use tracing::{debug, warn};
use vtu_sgpa_common::{
    interpret_health, interpret_response, ClientConfig, HealthResponse, ParseRequest, ResultPayload,
};

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig, timeout: Duration) -> Result<Self> {
        if config.sends_key_in_clear() {
            warn!(endpoint = %config.endpoint, "API key will be sent over plain HTTP");
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST the request and hand back status and raw body
    pub async fn post_parse(&self, request: &ParseRequest) -> Result<(u16, String)> {
        let url = self.config.parse_url();
        debug!(%url, bytes = request.pdf_content.len(), "POST parse_pdf");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "parse_pdf answered");
        Ok((status, body))
    }

    /// One submission outcome, ready for `UploadController::complete_submit`
    pub async fn parse(&self, request: &ParseRequest) -> vtu_sgpa_common::Result<ResultPayload> {
        let (status, body) = self
            .post_parse(request)
            .await
            .map_err(|e| vtu_sgpa_common::Error::Transport(e.to_string()))?;
        interpret_response(status, &body)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.config.health_url();
        debug!(%url, "GET health");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(interpret_health(status, &body)?)
    }
}
