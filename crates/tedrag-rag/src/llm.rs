//! Chat-completion client for the hosted model gateway.
//!
//! OpenAI-compatible wire format. Every request carries exactly two
//! messages: the fixed system instruction and the rendered user prompt.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tedrag_core::{ChatCompletion, RagError, Result};

/// Client for the gateway's `/chat/completions` endpoint.
pub struct LlmodChat {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

// No sampling or token-limit fields: the gateway rejects requests that pin
// temperature to zero, and the service defaults apply otherwise.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl LlmodChat {
    /// Create a new chat client.
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
impl ChatCompletion for LlmodChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RagError::Upstream(error_text));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| RagError::Upstream(e.to_string()))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| RagError::Upstream("No completion returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = LlmodChat::new(
            "test-key",
            "https://gateway.example.com/v1",
            "RPRTHPB-gpt-5-mini",
        );
        assert_eq!(client.model, "RPRTHPB-gpt-5-mini");
    }

    #[test]
    fn test_request_has_no_temperature() {
        let request = ChatRequest {
            model: "RPRTHPB-gpt-5-mini",
            messages: vec![
                Message {
                    role: "system",
                    content: "sys",
                },
                Message {
                    role: "user",
                    content: "usr",
                },
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("temperature").is_none());
        assert!(value.get("max_tokens").is_none());
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_decoding() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {
                    "message": { "role": "assistant", "content": "  an answer  " },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "total_tokens": 42 }
        }))
        .unwrap();

        // Content passes through untrimmed.
        assert_eq!(response.choices[0].message.content, "  an answer  ");
    }
}
