use chrono::{DateTime, Local, Utc};
use serde::Serialize;

pub const GREETING: &str = "Hello! I am your AI assistant for the Smart Information Retrieval \
System. How can I help you today?";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "How do I search for policies?",
    "What is NEP 2020?",
    "How to download documents?",
    "System usage guide",
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Display time, e.g. "10:30 AM".
    pub timestamp: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only chat log, seeded with the assistant greeting.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.append(Sender::Bot, GREETING.to_string(), Utc::now());
        transcript
    }

    pub fn append(&mut self, sender: Sender, text: String, sent_at: DateTime<Utc>) -> &Message {
        let message = Message {
            id: self.next_id,
            text,
            sender,
            timestamp: display_time(sent_at),
            sent_at,
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Quick questions are offered until the user has said anything.
    pub fn quick_questions(&self) -> Vec<String> {
        if self.messages.len() == 1 {
            QUICK_QUESTIONS.iter().map(|q| q.to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

fn display_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%I:%M %p").to_string()
}
