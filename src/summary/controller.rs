use crate::{
    config::PortalConfig,
    events::{self, SharedSink},
    operations::{OperationState, SimulatedOperation},
};

use super::document::{nep_2020_summary, DocumentSummary};

/// "Generate AI summary" panel of the document viewer.
#[derive(Clone)]
pub struct SummaryController {
    request: SimulatedOperation<DocumentSummary>,
}

impl SummaryController {
    pub fn new(config: &PortalConfig, sink: SharedSink) -> Self {
        Self {
            request: SimulatedOperation::new(
                "summary",
                events::SUMMARY_STATE_CHANGED,
                config.summary_delay,
                config.operation_timeout,
                sink,
            ),
        }
    }

    pub async fn state(&self) -> OperationState<DocumentSummary> {
        self.request.snapshot().await
    }

    pub async fn generate(&self) -> OperationState<DocumentSummary> {
        self.request.start(|| async { Ok(nep_2020_summary()) }).await
    }

    /// Same as `generate`: the previous summary is dropped before the new run.
    pub async fn generate_new(&self) -> OperationState<DocumentSummary> {
        self.generate().await
    }

    pub async fn reset(&self) -> OperationState<DocumentSummary> {
        self.request.cancel().await
    }

    #[cfg(test)]
    pub(crate) async fn wait_settled(&self) {
        self.request.join().await;
    }
}
