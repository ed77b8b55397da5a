pub mod classifier;

use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

use crate::web::models::{ChatRequest, ChatResponse, Choice, Message, Usage};

pub use classifier::{classify, Category};

/// Stand-in content when the request carries no messages.
pub const EMPTY_PROMPT: &str = "Sem mensagem";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("system clock is before the unix epoch: {0}")]
    Clock(#[from] SystemTimeError),
}

// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Whitespace word count, used as a rough token estimate.
pub fn estimate_tokens(text: &str) -> usize {
    text.split(is_separator).filter(|w| !w.is_empty()).count()
}

fn response_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("chatcmpl-{}", &hex[..12])
}

// Answers chat requests from the canned reply table instead of a model
pub struct LocalModel {
    name: String,
}

impl LocalModel {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        info!("Initializing canned-response model '{}'", name);
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        info!("Chat completion request received for model: {}", request.model());
        debug!(
            "Request parameters: temperature={}, max_tokens={}, stream={}",
            request.temperature(),
            request.max_tokens(),
            request.stream()
        );

        let prompt_tokens: usize = request
            .messages
            .iter()
            .map(|m| estimate_tokens(&m.content))
            .sum();

        let last_message = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or(EMPTY_PROMPT);

        let response_content = classify(last_message);
        let completion_tokens = estimate_tokens(response_content);
        let id = response_id();

        let preview: String = last_message.chars().take(50).collect();
        info!("Generating response for message: {}...", preview);

        let created = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

        let response = ChatResponse {
            id,
            object: "chat.completion".to_string(),
            created,
            model: request.model().to_string(),
            choices: vec![Choice {
                index: 0,
                message: Message::assistant(response_content),
                finish_reason: "stop".to_string(),
            }],
            usage: Usage::new(prompt_tokens, completion_tokens),
        };

        info!("Response generated with id: {}", response.id);
        Ok(response)
    }
}

impl Default for LocalModel {
    fn default() -> Self {
        Self::new(crate::web::models::DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn request(contents: &[&str]) -> ChatRequest {
        ChatRequest::new(contents.iter().map(|c| Message::user(*c)).collect())
    }

    #[test]
    fn usage_total_is_sum_of_parts() {
        let model = LocalModel::default();
        for contents in [
            vec!["oi"],
            vec!["primeira mensagem longa", "  segunda\tcom   espaços "],
            vec!["sql", "design", "um bug no código"],
        ] {
            let response = model.complete(&request(&contents)).unwrap();
            let usage = &response.usage;
            assert_eq!(usage.total_tokens, usage.prompt_tokens + usage.completion_tokens);
        }
    }

    #[test]
    fn prompt_tokens_count_every_message() {
        let model = LocalModel::default();
        let response = model
            .complete(&request(&["um dois três", " quatro  cinco "]))
            .unwrap();
        assert_eq!(response.usage.prompt_tokens, 5);
        assert_eq!(
            response.usage.completion_tokens,
            estimate_tokens(response.content().unwrap())
        );
    }

    #[test]
    fn only_last_message_is_classified() {
        let model = LocalModel::default();
        let response = model
            .complete(&request(&["meu código", "e agora o banco de dados"]))
            .unwrap();
        assert_eq!(response.content(), Some(Category::Database.reply()));
    }

    #[test]
    fn empty_request_uses_placeholder() {
        let model = LocalModel::default();
        let response = model.complete(&ChatRequest::new(Vec::new())).unwrap();
        assert_eq!(response.usage.prompt_tokens, 0);
        assert_eq!(response.content(), Some(Category::Default.reply()));
        assert_eq!(
            response.usage.completion_tokens,
            estimate_tokens(Category::Default.reply())
        );
    }

    #[test]
    fn envelope_fields() {
        let model = LocalModel::default();
        let mut req = request(&["Estou tendo um erro no meu código"]);
        req.model = Some("outro-modelo".to_string());
        let response = model.complete(&req).unwrap();

        assert!(response.id.starts_with("chatcmpl-"));
        assert_eq!(response.id.len(), "chatcmpl-".len() + 12);
        assert_eq!(response.object, "chat.completion");
        assert_eq!(response.model, "outro-modelo");
        assert!(response.created > 0);
        assert_eq!(response.choices.len(), 1);

        let choice = &response.choices[0];
        assert_eq!(choice.index, 0);
        assert_eq!(choice.finish_reason, "stop");
        assert_eq!(choice.message.role, "assistant");
        assert_eq!(choice.message.content, Category::Programming.reply());
    }

    #[test]
    fn ids_are_unique_across_calls() {
        let model = LocalModel::default();
        let req = request(&["oi"]);
        let ids: HashSet<String> = (0..1000)
            .map(|_| model.complete(&req).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn estimate_tokens_splits_on_any_whitespace() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("   "), 0);
        assert_eq!(estimate_tokens("a\nb\tc  d"), 4);
    }

    #[test]
    fn estimate_tokens_treats_ascii_separators_as_whitespace() {
        assert_eq!(estimate_tokens("um\x1cdois\x1dtrês\x1equatro\x1fcinco"), 5);
        assert_eq!(estimate_tokens("\x1f\x1c"), 0);
        assert_eq!(estimate_tokens("a\u{00a0}b"), 2);
    }
}
