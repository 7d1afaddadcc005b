use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::timeout_duration;
use crate::enums::analysis_error::AnalysisError;
use crate::errors::SentinelResult;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;
use crate::traits::analysis_service::AnalysisService;

/// Posts source code to the remote analysis service.
#[derive(Clone)]
pub struct HttpAnalysisService {
    endpoint_url: String,
    client: Client,
}

impl HttpAnalysisService {
    pub fn new(endpoint_url: String, timeout: Option<Duration>) -> SentinelResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint_url,
            client: builder.build()?,
        })
    }

    /// Refuses configs that `code-sentinel validate` would reject.
    pub fn from_config(config: &Config, endpoint_override: Option<&str>) -> SentinelResult<Self> {
        ConfigManager::ensure_valid(config)?;
        let endpoint_url = ConfigManager::resolve_endpoint(config, endpoint_override)?;
        Self::new(endpoint_url, config.service.timeout_secs.map(timeout_duration))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    async fn make_request(&self, request_body: &AnalyzeRequest) -> Result<reqwest::Response, AnalysisError> {
        self
            .client
            .post(&self.endpoint_url)
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AnalysisError::network(&self.endpoint_url, e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {

    async fn analyze(&self, code: &str) -> Result<AnalysisResult, AnalysisError> {
        let request_body = AnalyzeRequest { code: code.to_string() };
        let response = self.make_request(&request_body).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::status(&self.endpoint_url, status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::network(&self.endpoint_url, e.to_string()))?;

        AnalysisResult::from_json(&body)
    }

    fn endpoint(&self) -> String {
        self.endpoint_url.clone()
    }
}
