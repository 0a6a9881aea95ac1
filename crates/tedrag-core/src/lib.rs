//! tedrag Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout the tedrag system:
//! - Error taxonomy for the request pipeline
//! - Retrieved-passage models and the response envelope
//! - Shared traits for the external collaborators
//! - Configuration management

pub mod config;

pub use config::{Credentials, LlmodCredentials, PineconeCredentials, RagSettings};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Pipeline error taxonomy.
///
/// Every failure mode of a request maps onto exactly one of these tiers; the
/// message is the wire-visible error text, carried unmodified.
#[derive(Error, Debug)]
pub enum RagError {
    /// Malformed or missing client input. No upstream call has been made.
    #[error("{0}")]
    BadRequest(String),

    /// Required environment configuration is absent.
    #[error("{0}")]
    Config(String),

    /// A failure from the embedding, retrieval, or chat collaborator.
    #[error("{0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, RagError>;

// ============================================================================
// Retrieval Models
// ============================================================================

/// Metadata stored alongside each indexed passage.
///
/// The index treats metadata as an untyped map, so every field is optional
/// and decoded defensively; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMetadata {
    /// Identifier of the talk this passage came from
    pub talk_id: Option<String>,

    /// Talk title
    pub title: Option<String>,

    /// Primary speaker name
    pub speaker_1: Option<String>,

    /// Position of this passage within the talk transcript
    #[serde(deserialize_with = "lenient_chunk_index")]
    pub chunk_index: Option<u32>,

    /// The passage text itself
    pub text: Option<String>,
}

/// The index stores numerics as floats, so `chunk_index` can arrive as an
/// integer, a float, or a numeric string. Anything else decodes as absent.
fn lenient_chunk_index<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64().map(|f| f as u32),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as u32),
        _ => None,
    }))
}

/// One passage returned by the vector index, in service ranking order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievedMatch {
    /// Vector identifier assigned at indexing time
    pub id: String,

    /// Similarity score reported by the index
    pub score: Option<f32>,

    /// Decoded passage metadata
    pub metadata: MatchMetadata,
}

// ============================================================================
// Response Envelope
// ============================================================================

/// The exact two-part prompt sent to the chat model, echoed back to the
/// caller for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentedPrompt {
    #[serde(rename = "System")]
    pub system: String,

    #[serde(rename = "User")]
    pub user: String,
}

/// Per-match projection returned in the response `context` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextEntry {
    pub talk_id: Option<String>,
    pub title: Option<String>,
    pub chunk: String,
    pub score: Option<f32>,
}

impl From<&RetrievedMatch> for ContextEntry {
    fn from(m: &RetrievedMatch) -> Self {
        Self {
            talk_id: m.metadata.talk_id.clone(),
            title: m.metadata.title.clone(),
            chunk: m.metadata.text.clone().unwrap_or_default(),
            score: m.score,
        }
    }
}

/// Successful pipeline result: the generated answer, the retrieved context
/// projection, and the exact prompt pair sent upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub response: String,

    pub context: Vec<ContextEntry>,

    #[serde(rename = "Augmented_prompt")]
    pub augmented_prompt: AugmentedPrompt,
}

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Embedding collaborator: question text to a fixed-length vector.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Vector-index collaborator: nearest stored passages for a query vector.
///
/// An empty result is a valid, non-error outcome.
#[async_trait::async_trait]
pub trait VectorSearch: Send + Sync {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievedMatch>>;
}

/// Chat-completion collaborator: a (system, user) prompt pair to one answer.
#[async_trait::async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================
