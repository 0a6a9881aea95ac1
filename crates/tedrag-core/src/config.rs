//! tedrag Configuration Management
//!
//! Retrieval settings are compile-time constants; service credentials come
//! from environment variables, captured once at process start and validated
//! on first use so that a missing variable fails the request that needs it
//! rather than the process.

use crate::{RagError, Result};
use serde::{Deserialize, Serialize};

/// Retrieval and model settings.
///
/// These mirror the values the index was built with; they are not
/// introspected from the live index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagSettings {
    /// Embedding model identifier
    pub embedding_model: String,

    /// Chat model identifier
    pub chat_model: String,

    /// Number of passages requested from the index per query
    pub top_k: usize,

    /// Chunk size the transcripts were split with
    pub chunk_size: usize,

    /// Overlap ratio between adjacent chunks
    pub overlap_ratio: f32,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            embedding_model: "RPRTHPB-text-embedding-3-small".to_string(),
            chat_model: "RPRTHPB-gpt-5-mini".to_string(),
            top_k: 10,
            chunk_size: 1024,
            overlap_ratio: 0.2,
        }
    }
}

/// Credentials for the hosted model gateway (embeddings and chat).
#[derive(Debug, Clone)]
pub struct LlmodCredentials {
    pub api_key: String,
    /// Must terminate in the service's versioned `/v1` path segment.
    pub base_url: String,
}

/// Credentials for the managed vector index.
#[derive(Debug, Clone)]
pub struct PineconeCredentials {
    pub api_key: String,
    pub index_name: String,
}

/// Environment credential snapshot.
///
/// An unset or empty variable is captured as `None`; the accessors below
/// turn absence into a `Config` error at the point of use.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub llmod_api_key: Option<String>,
    pub llmod_base_url: Option<String>,
    pub pinecone_api_key: Option<String>,
    pub pinecone_index_name: Option<String>,
}

impl Credentials {
    /// Snapshot the required variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            llmod_api_key: read_env("LLMOD_API_KEY"),
            llmod_base_url: read_env("LLMOD_BASE_URL"),
            pinecone_api_key: read_env("PINECONE_API_KEY"),
            pinecone_index_name: read_env("PINECONE_INDEX_NAME"),
        }
    }

    /// Key and base URL for the embedding/chat service.
    pub fn llmod(&self) -> Result<LlmodCredentials> {
        match (&self.llmod_api_key, &self.llmod_base_url) {
            (Some(api_key), Some(base_url)) => Ok(LlmodCredentials {
                api_key: api_key.clone(),
                base_url: base_url.clone(),
            }),
            _ => Err(RagError::Config(
                "Missing LLMOD_API_KEY or LLMOD_BASE_URL environment variables.".to_string(),
            )),
        }
    }

    /// Key and index name for the vector index.
    pub fn pinecone(&self) -> Result<PineconeCredentials> {
        match (&self.pinecone_api_key, &self.pinecone_index_name) {
            (Some(api_key), Some(index_name)) => Ok(PineconeCredentials {
                api_key: api_key.clone(),
                index_name: index_name.clone(),
            }),
            _ => Err(RagError::Config(
                "Missing PINECONE_API_KEY or PINECONE_INDEX_NAME environment variables.".to_string(),
            )),
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
