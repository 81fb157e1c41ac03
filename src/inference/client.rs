use super::types::{ChatRequest, ChatResponse, InferenceReply};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn chat(&self, message: &str) -> Result<InferenceReply>;
}

/// Client for Ollama's native, non-streaming chat endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.url,
            model: config.model,
        })
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn chat(&self, message: &str) -> Result<InferenceReply> {
        let request = ChatRequest::single_turn(&self.model, message);

        debug!("Sending chat request to {} with model {}", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::InferenceUnavailable(e.to_string())
                } else {
                    Error::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Inference service answered with status {}: {}", status, body);
            return Err(Error::inference(format!(
                "Inference service answered with status {}",
                status
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            Error::inference(format!("Failed to parse inference response: {}", e))
        })?;

        InferenceReply::try_from(body)
    }
}
