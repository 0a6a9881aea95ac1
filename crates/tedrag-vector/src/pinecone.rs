//! Query client for the managed vector index.
//!
//! Access is two-step: the control plane resolves an index name to its
//! data-plane host, then queries go straight to that host with the same
//! API key.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tedrag_core::{RagError, Result, RetrievedMatch, VectorSearch};

const CONTROL_PLANE_URL: &str = "https://api.pinecone.io";

/// Handle to one named index on the managed service.
pub struct PineconeIndex {
    client: Client,
    api_key: String,
    host: String,
}

#[derive(Debug, Deserialize)]
struct DescribeIndexResponse {
    host: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    vector: &'a [f32],
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResponse {
    matches: Vec<RetrievedMatch>,
}

impl PineconeIndex {
    /// Resolve the index host and return a query handle.
    pub async fn connect(api_key: impl Into<String>, index_name: &str) -> Result<Self> {
        let api_key = api_key.into();
        let client = Client::new();

        let response = client
            .get(format!("{CONTROL_PLANE_URL}/indexes/{index_name}"))
            .header("Api-Key", &api_key)
            .send()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RagError::Upstream(error_text));
        }

        let described: DescribeIndexResponse = response
            .json()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            host: format!("https://{}", described.host),
        })
    }
}

#[async_trait]
impl VectorSearch for PineconeIndex {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievedMatch>> {
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
        };

        let response = self
            .client
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RagError::Upstream(error_text));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        tracing::debug!("Index returned {} matches", result.matches.len());

        Ok(result.matches)
    }
}
