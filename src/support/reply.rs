use async_trait::async_trait;

use crate::error::OperationError;

pub const NEP_REPLY: &str = "The National Education Policy (NEP) 2020 is available in our database. \
You can access it from the Dashboard or use the search feature. Would you like me to guide you to it?";

pub const SEARCH_REPLY: &str = "To search for documents, use the search bar on the Dashboard page. \
You can filter by year, department, and document type. What specific document are you looking for?";

pub const HELP_REPLY: &str = "I can help you with:\n\
- Finding educational policies and schemes\n\
- Navigating the system\n\
- Understanding document formats\n\
- Technical support\n\n\
What would you like to know more about?";

pub const FALLBACK_REPLY: &str = "Thank you for your question. I am here to help you navigate the \
Smart Information Retrieval System. Could you please provide more details about what you are looking for?";

/// Keyword groups checked in order; the first group with a hit answers.
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["nep", "policy"], NEP_REPLY),
    (&["search", "find"], SEARCH_REPLY),
    (&["help", "how"], HELP_REPLY),
];

/// Source of assistant replies. Swap in a real NLP backend behind this.
#[async_trait]
pub trait ReplyStrategy: Send + Sync {
    async fn resolve(&self, input: &str) -> Result<String, OperationError>;
}

/// Canned replies chosen by case-insensitive substring match.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordReplies;

#[async_trait]
impl ReplyStrategy for KeywordReplies {
    async fn resolve(&self, input: &str) -> Result<String, OperationError> {
        Ok(reply(input).to_string())
    }
}

pub fn reply(user_text: &str) -> &'static str {
    let lowered = user_text.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK_REPLY)
}
