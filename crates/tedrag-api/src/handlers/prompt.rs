//! Grounded question-answering handler

use crate::error::ApiError;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use tedrag_core::{PromptResponse, RagError};
use tedrag_rag::{LlmodChat, RagPipeline};
use tedrag_vector::{LlmodEmbeddings, PineconeIndex};
use utoipa::ToSchema;

/// Request body for `POST /prompt`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PromptRequest {
    /// The question to answer from the indexed TED material
    #[schema(example = "What is courage?")]
    pub question: String,
}

/// Extract and validate the question from the raw body.
///
/// Parsed by hand rather than through an extractor: the wire contract fixes
/// the exact 400 bodies for malformed JSON and for a missing question.
fn parse_question(body: &[u8]) -> Result<String, RagError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| RagError::BadRequest("Invalid JSON".to_string()))?;

    let question = value
        .get("question")
        .and_then(|q| q.as_str())
        .map(str::trim)
        .unwrap_or_default();

    if question.is_empty() {
        return Err(RagError::BadRequest("Missing 'question' field".to_string()));
    }

    Ok(question.to_string())
}

/// Handle grounded question-answering requests.
#[utoipa::path(
    post,
    path = "/prompt",
    tag = "rag",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Answer with retrieved context and the exact prompt sent"),
        (status = 400, description = "Malformed JSON or missing question", body = crate::error::ErrorBody),
        (status = 500, description = "Missing configuration or upstream failure", body = crate::error::ErrorBody)
    )
)]
pub async fn prompt_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PromptResponse>, ApiError> {
    let question = parse_question(&body)?;
    tracing::info!("POST /prompt: {question}");

    // Credentials are validated here, on first use, so absence surfaces as
    // a request-scoped configuration error.
    let llmod = state.credentials.llmod()?;
    let pinecone = state.credentials.pinecone()?;

    let embeddings = LlmodEmbeddings::new(
        llmod.api_key.clone(),
        llmod.base_url.clone(),
        state.settings.embedding_model.clone(),
    );
    let chat = LlmodChat::new(
        llmod.api_key,
        llmod.base_url,
        state.settings.chat_model.clone(),
    );
    let index = PineconeIndex::connect(pinecone.api_key, &pinecone.index_name).await?;

    let pipeline = RagPipeline::new(
        Arc::new(embeddings),
        Arc::new(index),
        Arc::new(chat),
        state.settings.clone(),
    );

    let response = pipeline.run(&question).await?;
    Ok(Json(response))
}
