use crate::error::{AppError, Result};
use crate::types::{GenerateResponse, PredictionRecord};
use reqwest::Client;

/// Thin wrapper over the generation endpoint: one GET per prompt.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests an image for `text` and returns the backend's prediction.
    ///
    /// The HTTP status is not consulted; a body that parses as a prediction
    /// envelope is returned as-is, whatever its `status`.
    pub async fn generate(&self, text: &str) -> Result<PredictionRecord> {
        let resp = match self
            .http
            .get(&self.endpoint)
            .query(&[("text", text)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Failed to reach generation endpoint: {e}");
                return Err(AppError::Transport(e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            log::debug!("Generation endpoint answered HTTP {status}");
        }

        let envelope = resp.json::<GenerateResponse>().await.map_err(|e| {
            if e.is_decode() {
                AppError::MalformedResponse(e.to_string())
            } else {
                AppError::Transport(e)
            }
        })?;

        Ok(envelope.prediction)
    }
}
