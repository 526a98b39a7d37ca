use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::analysis::AnalysisResult;
use super::order::OrderInput;
use crate::config::ScoringConfig;

/// Outbound seam to the external scoring service.
///
/// One call per explicit submission: implementations must not retry, cache,
/// or fabricate a result when the service fails.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, input: &OrderInput) -> Result<AnalysisResult, AnalysisError>;
}

/// Failure of a single analysis call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("scoring service unreachable: {0}")]
    Transport(String),
    #[error("scoring service responded with status {status}")]
    Status { status: u16 },
    #[error("scoring service returned a malformed payload: {0}")]
    Decode(String),
}

/// `reqwest`-backed client posting the order as JSON.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;
        Ok(Self::new(client, config.analyze_url()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, input: &OrderInput) -> Result<AnalysisResult, AnalysisError> {
        debug!(endpoint = %self.endpoint, "posting order to scoring service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "scoring service rejected order");
            return Err(AnalysisError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| AnalysisError::Decode(err.to_string()))
    }
}
