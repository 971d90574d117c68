//! OpenAiResponder - patient replies from an OpenAI-compatible Chat Completions API.
//!
//! The persona and the current openness band are described in a system
//! prompt; the session history follows as alternating assistant/user turns,
//! ending with the student's new message.

use crate::provider::{ReplyRequest, ResponseProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use vaxtalk_core::config::{DEFAULT_OPENAI_BASE_URL, ResponderConfig};
use vaxtalk_core::response::{LowMood, ResponseTier};
use vaxtalk_core::session::Speaker;
use vaxtalk_core::{Result, VaxtalkError};

/// Provider that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiResponder {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: Option<u32>,
}

impl OpenAiResponder {
    /// Creates a responder with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            max_tokens: None,
        }
    }

    /// Builds a responder from the `[responder]` config section.
    ///
    /// `model_override` (from `secret.json` or the environment) wins over the
    /// configured model.
    pub fn from_config(
        config: &ResponderConfig,
        api_key: impl Into<String>,
        model_override: Option<String>,
    ) -> Self {
        Self::new(api_key, model_override.unwrap_or_else(|| config.model.clone()))
            .with_base_url(config.base_url.clone())
            .with_max_tokens(config.max_tokens)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_messages(request: &ReplyRequest<'_>) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: system_prompt(request),
        });

        for turn in request.history {
            let role = match turn.speaker {
                Speaker::Patient => "assistant",
                Speaker::Student => "user",
            };
            messages.push(ChatMessage {
                role: role.to_string(),
                content: turn.message.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.student_message.to_string(),
        });

        messages
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| VaxtalkError::provider(format!("OpenAI API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| VaxtalkError::provider(format!("Failed to parse OpenAI response: {err}")))?;

        extract_text_response(parsed)
    }
}

impl std::fmt::Debug for OpenAiResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiResponder")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ResponseProvider for OpenAiResponder {
    async fn generate_reply(&self, request: &ReplyRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(request),
            max_tokens: self.max_tokens,
        };

        self.send_request(&body).await
    }
}

fn system_prompt(request: &ReplyRequest<'_>) -> String {
    let persona = request.persona;
    let concerns = persona
        .concerns
        .iter()
        .map(|c| c.to_string().replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ");

    let stance = match request.tier {
        ResponseTier::High { ready_to_proceed: true } => {
            "You have been persuaded and are ready to talk about getting vaccinated."
        }
        ResponseTier::High { .. } => {
            "You are warming up to the pharmacist and feel reassured, though you still ask follow-up questions."
        }
        ResponseTier::Medium { .. } => {
            "You are listening but still have concerns and want more specific information."
        }
        ResponseTier::Low { mood: LowMood::Confrontational } => {
            "You feel dismissed and are defensive and confrontational."
        }
        ResponseTier::Low { mood: LowMood::Skeptical } => "You are skeptical and unconvinced, and push back on what you hear.",
    };

    format!(
        "You are {name}, a patient talking to a pharmacy student about a vaccine. \
         You are {personality} and your concerns are: {concerns}. {stance} \
         Stay in character, reply in one to three short sentences, and never give medical advice yourself.",
        name = persona.name,
        personality = persona.personality,
    )
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| VaxtalkError::provider("OpenAI API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: &str) -> VaxtalkError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());

    VaxtalkError::provider(format!("OpenAI API returned {}: {message}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaxtalk_core::persona::PersonaCatalog;
    use vaxtalk_core::response::MediumTopic;
    use vaxtalk_core::scoring::ScoreSet;
    use vaxtalk_core::session::Turn;

    #[test]
    fn test_build_messages_maps_speakers() {
        let persona = PersonaCatalog::builtin().resolve("side_effects");
        let history = vec![Turn::patient(persona.initial_message.clone())];
        let scores = ScoreSet::zero();
        let request = ReplyRequest {
            persona: &persona,
            history: &history,
            student_message: "Most side effects are mild.",
            scores: &scores,
            openness: 0.3,
            turn_count: 1,
            tier: ResponseTier::Low { mood: LowMood::Confrontational },
        };

        let messages = OpenAiResponder::build_messages(&request);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Jennifer"));
        assert!(messages[0].content.contains("side effects"));
        assert!(messages[0].content.contains("confrontational"));
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].role, "user");
        assert_eq!(messages[2].content, "Most side effects are mild.");
    }

    #[test]
    fn test_map_http_error_prefers_api_message() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#,
        );
        assert!(err.is_provider());
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Incorrect API key provided"));

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_extract_text_response_requires_content() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "Okay, tell me more."}}]}"#).unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "Okay, tell me more.");

        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(extract_text_response(parsed).unwrap_err().is_provider());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_provider_error() {
        let persona = PersonaCatalog::builtin().default_persona();
        let scores = ScoreSet::zero();
        let request = ReplyRequest {
            persona: &persona,
            history: &[],
            student_message: "hello",
            scores: &scores,
            openness: 0.5,
            turn_count: 1,
            tier: ResponseTier::Medium { topic: MediumTopic::General },
        };

        let responder = OpenAiResponder::new("sk-test", "gpt-4o-mini")
            .with_base_url("http://127.0.0.1:9/v1/chat/completions");
        let err = responder.generate_reply(&request).await.unwrap_err();
        assert!(err.is_provider());
    }
}
