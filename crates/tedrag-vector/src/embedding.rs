//! Embedding client for the hosted model gateway.
//!
//! OpenAI-compatible wire format: bearer-authenticated JSON against a base
//! URL that already carries the versioned `/v1` path segment.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tedrag_core::{EmbeddingProvider, RagError, Result};

/// Client for the gateway's `/embeddings` endpoint.
pub struct LlmodEmbeddings {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl LlmodEmbeddings {
    /// Create a new embedding client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for LlmodEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RagError::Upstream(error_text));
        }

        let result: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| RagError::Upstream("No embedding returned".to_string()))
    }
}
