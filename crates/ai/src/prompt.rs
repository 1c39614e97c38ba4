//! Prompt assembly for the queue assistant.
//!
//! The system instruction carries the fixed persona, answer language, and
//! current date; the user prompt carries the full item set as pretty JSON
//! plus the question. The model never sees anything beyond the provided
//! data.

use chrono::NaiveDate;
use printboard_core::ProductionItem;

use crate::error::AssistantError;

/// Builds the fixed system instruction for a chat session.
pub fn build_system_instruction(
    shop_name: &str,
    answer_language: &str,
    today: NaiveDate,
) -> String {
    format!(
        "You are a helpful and friendly assistant for {shop_name}, a digital printing shop.\n\
Your purpose is to provide quick and accurate answers about the current production queue \
based on the data provided.\n\
- Analyze the provided JSON data which represents the current list of production items.\n\
- Answer user questions clearly and concisely in {answer_language}.\n\
- Be friendly and professional.\n\
- If a question cannot be answered from the provided data, politely say so.\n\
- Do not make up information.\n\
- The current date is {today}."
    )
}

/// Serializes the item set and the user question into one prompt.
pub fn build_question_prompt(
    items: &[ProductionItem],
    question: &str,
) -> Result<String, AssistantError> {
    let data = serde_json::to_string_pretty(items)
        .map_err(|e| AssistantError::internal(e.to_string()))?;

    Ok(format!(
        "This is the current production data:\n{data}\n\nUser question: \"{question}\"\n"
    ))
}
