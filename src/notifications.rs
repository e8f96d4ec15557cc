use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::OperationError,
    events::{self, SharedSink},
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient, dismissible toast. Never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Clone)]
pub struct Notifier {
    sink: SharedSink,
}

impl Notifier {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    pub fn operation_failed(&self, err: &OperationError) {
        if err.is_user_visible() {
            self.error(err.to_string());
        }
    }

    fn push(&self, level: NotificationLevel, message: String) {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            level,
            message,
        };
        events::emit(self.sink.as_ref(), events::TOAST, &notification);
    }
}
