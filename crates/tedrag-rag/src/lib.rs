//! tedrag RAG - the single-request retrieval pipeline
//!
//! Strictly linear, stateless per invocation: embed the question, query the
//! index for the top-K passages, assemble the grounded prompt, call the chat
//! model once, and package the envelope. No retries, no caching, no
//! conversation state.

pub mod llm;
pub mod prompt;

pub use llm::LlmodChat;
pub use prompt::{build_user_prompt, EMPTY_CONTEXT_PLACEHOLDER, REFUSAL_SENTENCE, SYSTEM_PROMPT};

use std::sync::Arc;
use tedrag_core::{
    AugmentedPrompt, ChatCompletion, ContextEntry, EmbeddingProvider, PromptResponse, RagSettings,
    Result, VectorSearch,
};

/// Single-request pipeline over the three external collaborators.
///
/// Constructed fresh per request and dropped at the end; holds no state
/// beyond its clients and settings.
pub struct RagPipeline {
    embeddings: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorSearch>,
    chat: Arc<dyn ChatCompletion>,
    settings: RagSettings,
}

impl RagPipeline {
    /// Create a new pipeline.
    pub fn new(
        embeddings: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorSearch>,
        chat: Arc<dyn ChatCompletion>,
        settings: RagSettings,
    ) -> Self {
        Self {
            embeddings,
            index,
            chat,
            settings,
        }
    }

    /// Run the full pipeline for one question.
    pub async fn run(&self, question: &str) -> Result<PromptResponse> {
        tracing::info!("RAG request started");

        // 1. Embed the question
        let vector = self.embeddings.embed(question).await?;
        tracing::debug!("Question embedded: {} dimensions", vector.len());

        // 2. Retrieve nearest passages
        let matches = self.index.query(&vector, self.settings.top_k).await?;
        tracing::debug!("Retrieved {} matches", matches.len());

        // 3. Assemble the grounded prompt
        let user_prompt = prompt::build_user_prompt(question, &matches);

        // 4. Generate the answer
        let answer = self
            .chat
            .complete(prompt::SYSTEM_PROMPT, &user_prompt)
            .await?;
        tracing::info!("Chat completion received: {} chars", answer.len());

        // 5. Package the envelope
        Ok(PromptResponse {
            response: answer,
            context: matches.iter().map(ContextEntry::from).collect(),
            augmented_prompt: AugmentedPrompt {
                system: prompt::SYSTEM_PROMPT.to_string(),
                user: user_prompt,
            },
        })
    }
}
