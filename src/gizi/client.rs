use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::dto::{AnalysisResult, FormInputs};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to gizi endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gizi response is not usable JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait GiziClient: Send + Sync {
    async fn check_gizi(&self, inputs: &FormInputs) -> Result<AnalysisResult, ClientError>;
}

#[derive(Clone)]
pub struct HttpGiziClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGiziClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GiziClient for HttpGiziClient {
    async fn check_gizi(&self, inputs: &FormInputs) -> Result<AnalysisResult, ClientError> {
        // `.json()` sets Content-Type: application/json
        let res = self.http.post(&self.endpoint).json(inputs).send().await?;
        // status is not inspected; the body carries the error fields
        debug!(status = %res.status(), endpoint = %self.endpoint, "gizi response");
        let bytes = res.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(AnalysisResult::from_value(value)?)
    }
}
