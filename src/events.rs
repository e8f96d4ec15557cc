//! Outbound events to the webview.
//!
//! Controllers never talk to the shell directly; they push serialized payloads
//! through an [`EventSink`]. The desktop shell implements it on `AppHandle`.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

pub const NAVIGATION_STATE_CHANGED: &str = "navigation-state-changed";
pub const VOICE_STATE_CHANGED: &str = "voice-state-changed";
pub const SUMMARY_STATE_CHANGED: &str = "summary-state-changed";
pub const CHAT_STATE_CHANGED: &str = "chat-state-changed";
pub const CHAT_REPLY_STATE_CHANGED: &str = "chat-reply-state-changed";
pub const TOAST: &str = "toast";

pub trait EventSink: Send + Sync {
    fn emit_value(&self, event: &str, payload: Value) -> Result<()>;
}

pub type SharedSink = Arc<dyn EventSink>;

/// Serialize `payload` and push it; failures are logged, never propagated.
///
/// A missing listener must not abort a state transition that already happened.
pub fn emit<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    let value = match serde_json::to_value(payload) {
        Ok(value) => value,
        Err(err) => {
            log::error!("failed to serialize {event} payload: {err}");
            return;
        }
    };

    if let Err(err) = sink.emit_value(event, value) {
        log::warn!("failed to emit {event}: {err}");
    }
}

#[cfg(feature = "desktop")]
impl EventSink for tauri::AppHandle {
    fn emit_value(&self, event: &str, payload: Value) -> Result<()> {
        use tauri::Emitter;

        self.emit(event, payload)
            .map_err(|err| anyhow::anyhow!("failed to emit {event}: {err}"))
    }
}
