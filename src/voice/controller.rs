use serde::Serialize;

use crate::{
    config::PortalConfig,
    error::OperationError,
    events::{self, SharedSink},
    navigation::{NavigationController, NavigationState},
    operations::{OperationState, OperationStatus, SimulatedOperation},
};

pub const SAMPLE_TRANSCRIPT: &str = "Tell me about National Education Policy 2020";

/// Dialog-facing view of a capture: listening until the transcript arrives.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSearchSession {
    pub dialog_open: bool,
    pub listening: bool,
    pub transcript: Option<String>,
}

impl From<&OperationState<String>> for VoiceSearchSession {
    fn from(state: &OperationState<String>) -> Self {
        Self {
            dialog_open: state.status != OperationStatus::Idle,
            listening: state.status == OperationStatus::Pending,
            transcript: state.payload.clone(),
        }
    }
}

#[derive(Clone)]
pub struct VoiceSearchController {
    capture: SimulatedOperation<String>,
}

impl VoiceSearchController {
    pub fn new(config: &PortalConfig, sink: SharedSink) -> Self {
        Self {
            capture: SimulatedOperation::new(
                "voice-search",
                events::VOICE_STATE_CHANGED,
                config.voice_capture_delay,
                config.operation_timeout,
                sink,
            ),
        }
    }

    pub async fn session(&self) -> VoiceSearchSession {
        VoiceSearchSession::from(&self.capture.snapshot().await)
    }

    /// Opening an already-open dialog restarts the capture.
    pub async fn open_dialog(&self) -> VoiceSearchSession {
        self.listen().await
    }

    /// "Try again": drops the transcript and listens afresh.
    pub async fn try_again(&self) -> VoiceSearchSession {
        self.listen().await
    }

    /// Closing cancels a capture that has not landed yet.
    pub async fn close_dialog(&self) -> VoiceSearchSession {
        VoiceSearchSession::from(&self.capture.cancel().await)
    }

    /// Submits the captured transcript as a search and closes the dialog.
    pub async fn search_now(
        &self,
        navigation: &NavigationController,
    ) -> Result<NavigationState, OperationError> {
        let transcript = self
            .capture
            .snapshot()
            .await
            .payload
            .ok_or_else(|| OperationError::validation("No voice query captured yet"))?;

        let navigation_state = navigation.submit_search(&transcript).await?;
        self.close_dialog().await;
        Ok(navigation_state)
    }

    #[cfg(test)]
    pub(crate) async fn wait_settled(&self) {
        self.capture.join().await;
    }

    async fn listen(&self) -> VoiceSearchSession {
        let state = self
            .capture
            .start(|| async { Ok(SAMPLE_TRANSCRIPT.to_string()) })
            .await;
        VoiceSearchSession::from(&state)
    }
}
