//! Printboard AI - conversational assistant over the production queue.
//!
//! One-question → one-answer chat grounded in the current item set, using
//! rig-core for LLM orchestration. Failures degrade to plain-language chat
//! messages; the conversation always stays usable.
//!
//! # Example
//!
//! ```ignore
//! use printboard_ai::{AssistantConfig, AssistantService, AssistantTrait};
//!
//! let service = AssistantService::new(AssistantConfig {
//!     api_key: Some("...".to_string()),
//!     ..AssistantConfig::default()
//! });
//!
//! let items = state.items();
//! let reply = service.ask_or_apologize(&items, "How many orders are in progress?").await;
//! ```

pub mod assistant;
pub mod error;
pub mod prompt;

// Re-export main types for convenience
pub use assistant::{
    AssistantConfig, AssistantService, AssistantTrait, FakeAssistant, APOLOGY_REPLY,
    MISSING_KEY_REPLY,
};
pub use error::AssistantError;
pub use prompt::{build_question_prompt, build_system_instruction};
