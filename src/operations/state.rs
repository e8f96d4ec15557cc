use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
    Failed,
}

/// One simulated request cycle: idle → pending → resolved | failed.
///
/// `run_id` identifies the current cycle; a completion for any other id is stale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationState<T> {
    pub status: OperationStatus,
    pub run_id: Option<String>,
    pub payload: Option<T>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub settled_at: Option<DateTime<Utc>>,
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self {
            status: OperationStatus::Idle,
            run_id: None,
            payload: None,
            error: None,
            started_at: None,
            settled_at: None,
        }
    }
}

impl<T> OperationState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters pending for a fresh run, discarding whatever the last run produced.
    pub fn begin(&mut self, run_id: String, now: DateTime<Utc>) {
        *self = Self {
            status: OperationStatus::Pending,
            run_id: Some(run_id),
            started_at: Some(now),
            ..Self::default()
        };
    }

    pub fn is_current(&self, run_id: &str) -> bool {
        self.status == OperationStatus::Pending && self.run_id.as_deref() == Some(run_id)
    }

    /// Returns false when the run is stale and nothing changed.
    pub fn resolve(&mut self, run_id: &str, payload: T, now: DateTime<Utc>) -> bool {
        if !self.is_current(run_id) {
            return false;
        }
        self.status = OperationStatus::Resolved;
        self.payload = Some(payload);
        self.settled_at = Some(now);
        true
    }

    pub fn fail(&mut self, run_id: &str, error: String, now: DateTime<Utc>) -> bool {
        if !self.is_current(run_id) {
            return false;
        }
        self.status = OperationStatus::Failed;
        self.error = Some(error);
        self.settled_at = Some(now);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_payload() {
        let mut state = OperationState::new();
        state.begin("a".into(), Utc::now());
        assert!(state.resolve("a", 7, Utc::now()));
        assert_eq!(state.payload, Some(7));

        state.begin("b".into(), Utc::now());
        assert_eq!(state.status, OperationStatus::Pending);
        assert_eq!(state.payload, None);
        assert!(state.settled_at.is_none());
    }

    #[test]
    fn stale_runs_cannot_settle() {
        let mut state = OperationState::new();
        state.begin("a".into(), Utc::now());
        state.begin("b".into(), Utc::now());

        assert!(!state.resolve("a", 1, Utc::now()));
        assert!(!state.fail("a", "boom".into(), Utc::now()));
        assert_eq!(state.status, OperationStatus::Pending);

        assert!(state.resolve("b", 2, Utc::now()));
        assert!(!state.resolve("b", 3, Utc::now()));
        assert_eq!(state.payload, Some(2));
    }

    #[test]
    fn reset_run_cannot_settle() {
        let mut state: OperationState<u8> = OperationState::new();
        state.begin("a".into(), Utc::now());
        state.reset();
        assert!(!state.resolve("a", 1, Utc::now()));
        assert_eq!(state.status, OperationStatus::Idle);
    }
}
