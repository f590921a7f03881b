//! Claude Messages API client.

use super::{Summarizer, SummaryPayload, SummaryRequest};
use crate::config::SummaryPrompt;
use crate::error::{Result, TldwError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed output budget for a summary.
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default timeout for API requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Claude-backed summarizer.
pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
    prompt: SummaryPrompt,
}

impl ClaudeClient {
    /// Create a client with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: SummaryPrompt::default(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    async fn create_message(&self, body: &MessagesRequest) -> Result<MessagesResponse> {
        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(err) => err.error.message,
                Err(_) => "unparseable error body".to_string(),
            };
            return Err(TldwError::Api(format!("{}: {}", status, message)));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Summarizer for ClaudeClient {
    #[instrument(skip(self, request), fields(title = %request.title, model = %request.model))]
    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        // A custom instruction replaces the default system prompt and drops
        // the structured-output contract with it.
        let structured = request.instruction.is_none();
        let system = match &request.instruction {
            Some(instruction) => instruction.clone(),
            None => self.prompt.system.clone(),
        };

        let mut vars = HashMap::new();
        vars.insert("title".to_string(), request.title.clone());
        vars.insert("transcript".to_string(), request.transcript.clone());
        let user = SummaryPrompt::render(&self.prompt.user, &vars);

        let mut messages = vec![Message {
            role: "user".to_string(),
            content: user,
        }];
        if structured {
            // Prefill steers the model straight into the JSON object.
            messages.push(Message {
                role: "assistant".to_string(),
                content: "{".to_string(),
            });
        }

        let body = MessagesRequest {
            model: request.model.api_id().to_string(),
            max_tokens: self.max_tokens,
            temperature: 0.0,
            system,
            messages,
        };

        let response = self.create_message(&body).await?;
        debug!(
            "Claude usage: {} input tokens, {} output tokens",
            response.usage.input_tokens, response.usage.output_tokens
        );

        let text = response
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| TldwError::Api("Empty response content".to_string()))?;

        if structured {
            let payload = SummaryPayload::parse_prefilled(&text)?;
            Ok(payload.render())
        } else {
            Ok(text)
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::Model;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn request(instruction: Option<&str>) -> SummaryRequest {
        SummaryRequest {
            transcript: "we talk about ownership and borrowing".to_string(),
            title: "Rust Basics".to_string(),
            model: Model::Haiku,
            instruction: instruction.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_structured_summary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .and(header("x-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "\"title\": \"Rust Basics\", \"summary\": [\"- Ownership\", \"- Borrowing\"]}"}],
                "usage": {"input_tokens": 100, "output_tokens": 30}
            })))
            .mount(&server)
            .await;

        let client = ClaudeClient::new("test-key").with_base_url(server.uri());
        let summary = client.summarize(&request(None)).await.unwrap();
        assert!(summary.starts_with("Rust Basics\n\n"));
        assert!(summary.contains("- Ownership"));
    }

    #[tokio::test]
    async fn test_custom_instruction_passes_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "A free-form haiku about Rust."}],
                "usage": {"input_tokens": 50, "output_tokens": 10}
            })))
            .mount(&server)
            .await;

        let client = ClaudeClient::new("test-key").with_base_url(server.uri());
        let summary = client
            .summarize(&request(Some("Reply with a haiku")))
            .await
            .unwrap();
        assert_eq!(summary, "A free-form haiku about Rust.");
    }

    #[tokio::test]
    async fn test_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "\"title\": \"T\", \"summary\": []}"}]
            })))
            .mount(&server)
            .await;

        let client = ClaudeClient::new("test-key").with_base_url(server.uri());
        client.summarize(&request(None)).await.unwrap();

        let received: Vec<Request> = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();

        assert_eq!(body["model"], "claude-3-haiku-20240307");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["temperature"], 0.0);
        // User message embeds title and transcript; assistant prefill follows.
        let user = body["messages"][0]["content"].as_str().unwrap();
        assert!(user.contains("Rust Basics"));
        assert!(user.contains("ownership and borrowing"));
        assert_eq!(body["messages"][1]["role"], "assistant");
        assert_eq!(body["messages"][1]["content"], "{");
    }

    #[tokio::test]
    async fn test_api_error_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&server)
            .await;

        let client = ClaudeClient::new("bad-key").with_base_url(server.uri());
        let result = client.summarize(&request(None)).await;
        match result {
            Err(TldwError::Api(message)) => assert!(message.contains("invalid x-api-key")),
            other => panic!("Expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_malformed_structured_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "Sorry, I can't produce JSON today."}]
            })))
            .mount(&server)
            .await;

        let client = ClaudeClient::new("test-key").with_base_url(server.uri());
        let result = client.summarize(&request(None)).await;
        assert!(matches!(result, Err(TldwError::MalformedResponse(_))));
    }
}
