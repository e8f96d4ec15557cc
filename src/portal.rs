use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::PortalConfig,
    events::SharedSink,
    navigation::{NavigationController, NavigationState},
    session_store::SessionStore,
    summary::SummaryController,
    support::SupportChatController,
    voice::VoiceSearchController,
};

/// Every controller the shell manages, wired to one sink.
#[derive(Clone)]
pub struct Portal {
    pub navigation: NavigationController,
    pub voice: VoiceSearchController,
    pub summary: SummaryController,
    pub support: SupportChatController,
}

impl Portal {
    pub fn new(store: Arc<SessionStore>, config: &PortalConfig, sink: SharedSink) -> Self {
        Self {
            navigation: NavigationController::new(store, sink.clone()),
            voice: VoiceSearchController::new(config, sink.clone()),
            summary: SummaryController::new(config, sink.clone()),
            support: SupportChatController::new(config, sink),
        }
    }

    /// Cancels in-flight runs before the session is cleared, so they are
    /// gone even when the session file cannot be written.
    pub async fn logout(&self) -> Result<NavigationState> {
        self.voice.close_dialog().await;
        self.summary.reset().await;
        self.navigation.logout().await
    }
}
