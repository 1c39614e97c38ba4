//! Queue assistant - provider dispatch and degradation to chat messages.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use rig::{
    client::CompletionClient,
    completion::Prompt,
    providers::{anthropic, gemini, openai},
};

use printboard_core::utils::time_utils::queue_date_today;
use printboard_core::ProductionItem;

use crate::error::AssistantError;
use crate::prompt::{build_question_prompt, build_system_instruction};

/// Reply used when the provider call fails.
pub const APOLOGY_REPLY: &str =
    "Sorry, something went wrong while contacting the assistant. Please try again later.";

/// Reply used when no API key is configured.
pub const MISSING_KEY_REPLY: &str =
    "The assistant API key is not configured. Please contact the administrator.";

/// Configuration for the queue assistant.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Provider id: "gemini" (default), "anthropic", or OpenAI-compatible.
    pub provider_id: String,
    pub model_id: String,
    pub api_key: Option<String>,
    /// Shop name used in the persona.
    pub shop_name: String,
    /// Language the assistant answers in.
    pub answer_language: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider_id: "gemini".to_string(),
            model_id: "gemini-2.5-flash".to_string(),
            api_key: None,
            shop_name: "the print shop".to_string(),
            answer_language: "English".to_string(),
        }
    }
}

/// Trait for answering questions about the production queue.
#[async_trait]
pub trait AssistantTrait: Send + Sync {
    /// Answers one question grounded in the given item set.
    async fn ask(
        &self,
        items: &[ProductionItem],
        question: &str,
    ) -> Result<String, AssistantError>;

    /// Like [`ask`](Self::ask), but degrades failures to plain-language
    /// replies so the conversation stays usable.
    async fn ask_or_apologize(&self, items: &[ProductionItem], question: &str) -> String {
        match self.ask(items, question).await {
            Ok(answer) => answer,
            Err(AssistantError::MissingApiKey(provider)) => {
                warn!("Assistant API key missing for provider {}", provider);
                MISSING_KEY_REPLY.to_string()
            }
            Err(e) => {
                warn!("Assistant request failed: {}", e);
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

/// LLM-backed assistant using rig providers.
pub struct AssistantService {
    config: AssistantConfig,
}

impl AssistantService {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    fn api_key(&self) -> Result<&str, AssistantError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AssistantError::MissingApiKey(self.config.provider_id.clone()))
    }

    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, AssistantError> {
        let key = self.api_key()?;
        let model_id = &self.config.model_id;

        let response = match self.config.provider_id.as_str() {
            "anthropic" => {
                let client: anthropic::Client<HttpClient> = anthropic::Client::new(key)
                    .map_err(|e| AssistantError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AssistantError::Provider(e.to_string()))?
            }
            "gemini" | "google" => {
                let client: gemini::Client<HttpClient> = gemini::Client::new(key)
                    .map_err(|e| AssistantError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AssistantError::Provider(e.to_string()))?
            }
            _ => {
                // Default to OpenAI-compatible
                let client: openai::Client<HttpClient> = openai::Client::new(key)
                    .map_err(|e| AssistantError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AssistantError::Provider(e.to_string()))?
            }
        };

        Ok(response)
    }
}

#[async_trait]
impl AssistantTrait for AssistantService {
    async fn ask(
        &self,
        items: &[ProductionItem],
        question: &str,
    ) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::invalid_input("Question cannot be empty"));
        }

        let system = build_system_instruction(
            &self.config.shop_name,
            &self.config.answer_language,
            queue_date_today(),
        );
        let prompt = build_question_prompt(items, question)?;

        debug!(
            "Asking assistant ({} {}) about {} items",
            self.config.provider_id,
            self.config.model_id,
            items.len()
        );

        let answer = self.complete(&system, &prompt).await?;
        Ok(answer.trim().to_string())
    }
}

// ============================================================================
// Fake Assistant for Testing
// ============================================================================

/// Deterministic assistant for tests.
pub struct FakeAssistant {
    /// Fixed reply to return, or None to fail every request.
    pub reply: Option<String>,
}

impl FakeAssistant {
    /// Create a fake assistant that returns a fixed reply.
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }

    /// Create a fake assistant whose provider always fails.
    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl AssistantTrait for FakeAssistant {
    async fn ask(
        &self,
        _items: &[ProductionItem],
        question: &str,
    ) -> Result<String, AssistantError> {
        if question.trim().is_empty() {
            return Err(AssistantError::invalid_input("Question cannot be empty"));
        }
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AssistantError::provider("fake provider failure")),
        }
    }
}
