//! Prompt assembly for the grounded question-answering call.
//!
//! Pure string construction: (question, matches) in, rendered user text out.
//! The system text is a fixed instruction; the user text interleaves the
//! question with every retrieved passage in retrieval order.

use tedrag_core::RetrievedMatch;

/// Refusal sentence the model must use verbatim when the context is
/// insufficient. The apostrophe is U+2019, matching the indexed dataset's
/// prompt conventions.
pub const REFUSAL_SENTENCE: &str = "I don’t know based on the provided TED data.";

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a TED Talk assistant that answers questions strictly and only \
based on the TED dataset context provided to you (metadata and transcript passages). \
You must not use any external knowledge, the open internet, or information that is \
not explicitly contained in the retrieved context. If the answer cannot be determined \
from the provided context, respond: \"I don’t know based on the provided TED data.\" \
Always explain your answer using the given context, quoting or paraphrasing the \
relevant transcript or metadata when helpful.";

/// Rendered in place of the context blocks when retrieval returned nothing.
pub const EMPTY_CONTEXT_PLACEHOLDER: &str = "(no context retrieved)";

/// Render the user prompt.
///
/// Each match becomes a block with a 1-based ordinal, its identifying
/// metadata, and the raw passage text; blocks are joined by blank lines in
/// retrieval order. Absent metadata fields render as empty strings.
pub fn build_user_prompt(question: &str, matches: &[RetrievedMatch]) -> String {
    let blocks: Vec<String> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| render_block(i + 1, m))
        .collect();

    let context_text = if blocks.is_empty() {
        EMPTY_CONTEXT_PLACEHOLDER.to_string()
    } else {
        blocks.join("\n\n")
    };

    format!(
        "You are given several context chunks from TED talks. Use only this context to answer the question.\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Context:\n\
         {context_text}\n\
         \n\
         Now provide a concise answer based only on this context.\n\
         If the answer cannot be determined from the context, respond exactly with:\n\
         \"{REFUSAL_SENTENCE}\""
    )
}

fn render_block(ordinal: usize, m: &RetrievedMatch) -> String {
    let meta = &m.metadata;
    let chunk_index = meta.chunk_index.map(|i| i.to_string()).unwrap_or_default();

    format!(
        "[{ordinal}] talk_id={}, title={}, speaker={}, chunk_index={}\n{}",
        meta.talk_id.as_deref().unwrap_or_default(),
        meta.title.as_deref().unwrap_or_default(),
        meta.speaker_1.as_deref().unwrap_or_default(),
        chunk_index,
        meta.text.as_deref().unwrap_or_default(),
    )
}
