use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::Serialize;

use crate::{
    config::PortalConfig,
    error::OperationError,
    events::{self, SharedSink},
    notifications::Notifier,
    operations::{OperationStatus, SimulatedOperation},
};

use super::{
    reply::{KeywordReplies, ReplyStrategy},
    transcript::{ChatTranscript, Message, Sender},
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub typing: bool,
    pub quick_questions: Vec<String>,
}

/// Support screen chatbot: user turns land immediately, bot turns after the delay.
#[derive(Clone)]
pub struct SupportChatController {
    transcript: Arc<Mutex<ChatTranscript>>,
    reply: SimulatedOperation<String>,
    strategy: Arc<dyn ReplyStrategy>,
    send_gate: Arc<tokio::sync::Mutex<()>>,
    sink: SharedSink,
    notifier: Notifier,
}

impl SupportChatController {
    pub fn new(config: &PortalConfig, sink: SharedSink) -> Self {
        Self::with_strategy(config, sink, Arc::new(KeywordReplies))
    }

    pub fn with_strategy(
        config: &PortalConfig,
        sink: SharedSink,
        strategy: Arc<dyn ReplyStrategy>,
    ) -> Self {
        Self {
            transcript: Arc::new(Mutex::new(ChatTranscript::new())),
            reply: SimulatedOperation::new(
                "chat-reply",
                events::CHAT_REPLY_STATE_CHANGED,
                config.chat_reply_delay,
                config.operation_timeout,
                sink.clone(),
            ),
            strategy,
            send_gate: Arc::new(tokio::sync::Mutex::new(())),
            notifier: Notifier::new(sink.clone()),
            sink,
        }
    }

    pub async fn state(&self) -> ChatState {
        let typing = self.reply.status().await == OperationStatus::Pending;
        chat_state(&lock_transcript(&self.transcript), typing)
    }

    pub async fn send(&self, text: &str) -> Result<ChatState, OperationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.reject("Please enter a message"));
        }

        let _gate = self.send_gate.lock().await;
        if self.reply.status().await == OperationStatus::Pending {
            return Err(self.reject("Please wait for the assistant to finish replying"));
        }

        let pending_state = {
            let mut transcript = lock_transcript(&self.transcript);
            transcript.append(Sender::User, text.to_string(), Utc::now());
            chat_state(&transcript, true)
        };
        events::emit(self.sink.as_ref(), events::CHAT_STATE_CHANGED, &pending_state);
        crate::log_info!("Chat message queued for reply ({} chars)", text.len());

        let strategy = self.strategy.clone();
        let prompt = text.to_string();
        let transcript = self.transcript.clone();
        let sink = self.sink.clone();

        self.reply
            .start_with_hook(
                move || async move { strategy.resolve(&prompt).await },
                Some(Box::new(move |outcome: &Result<String, OperationError>| {
                    let settled = {
                        let mut transcript = lock_transcript(&transcript);
                        if let Ok(answer) = outcome {
                            transcript.append(Sender::Bot, answer.clone(), Utc::now());
                        }
                        chat_state(&transcript, false)
                    };
                    events::emit(sink.as_ref(), events::CHAT_STATE_CHANGED, &settled);
                })),
            )
            .await;

        Ok(pending_state)
    }

    fn reject(&self, message: &str) -> OperationError {
        let err = OperationError::validation(message);
        self.notifier.operation_failed(&err);
        err
    }

    #[cfg(test)]
    pub(crate) async fn wait_settled(&self) {
        self.reply.join().await;
    }
}

fn lock_transcript(transcript: &Mutex<ChatTranscript>) -> MutexGuard<'_, ChatTranscript> {
    match transcript.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn chat_state(transcript: &ChatTranscript, typing: bool) -> ChatState {
    ChatState {
        messages: transcript.messages().to_vec(),
        typing,
        quick_questions: transcript.quick_questions(),
    }
}
