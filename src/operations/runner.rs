use std::{future::Future, sync::Arc, time::Duration};

use chrono::Utc;
use serde::Serialize;
use tokio::{sync::Mutex, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    error::OperationError,
    events::{self, SharedSink},
    notifications::Notifier,
};

use super::{OperationState, OperationStatus};

const ENABLE_LOGS: bool = true;

/// Called once with the outcome of a run that was still current when it settled.
pub type SettleHook<T> = Box<dyn FnOnce(&Result<T, OperationError>) + Send + 'static>;

struct ActiveRun {
    run_id: String,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Timer-driven stand-in for a remote call.
///
/// Each `start` spawns one run: wait `delay`, then await the payload source
/// under `timeout`. At most one run is active; starting again or calling
/// `cancel` fires the previous run's token.
pub struct SimulatedOperation<T> {
    name: &'static str,
    event: &'static str,
    delay: Duration,
    timeout: Duration,
    state: Arc<Mutex<OperationState<T>>>,
    active: Arc<Mutex<Option<ActiveRun>>>,
    sink: SharedSink,
    notifier: Notifier,
}

impl<T> Clone for SimulatedOperation<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            event: self.event,
            delay: self.delay,
            timeout: self.timeout,
            state: self.state.clone(),
            active: self.active.clone(),
            sink: self.sink.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<T> SimulatedOperation<T>
where
    T: Clone + Serialize + Send + Sync + 'static,
{
    pub fn new(
        name: &'static str,
        event: &'static str,
        delay: Duration,
        timeout: Duration,
        sink: SharedSink,
    ) -> Self {
        Self {
            name,
            event,
            delay,
            timeout,
            state: Arc::new(Mutex::new(OperationState::new())),
            active: Arc::new(Mutex::new(None)),
            notifier: Notifier::new(sink.clone()),
            sink,
        }
    }

    pub async fn snapshot(&self) -> OperationState<T> {
        self.state.lock().await.clone()
    }

    pub async fn status(&self) -> OperationStatus {
        self.state.lock().await.status
    }

    pub async fn start<F, Fut>(&self, source: F) -> OperationState<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, OperationError>> + Send + 'static,
    {
        self.start_with_hook(source, None).await
    }

    pub async fn start_with_hook<F, Fut>(
        &self,
        source: F,
        on_settled: Option<SettleHook<T>>,
    ) -> OperationState<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, OperationError>> + Send + 'static,
    {
        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            crate::log_info!("{}: restarting, cancelling run {}", self.name, previous.run_id);
            previous.cancel_token.cancel();
        }

        let run_id = Uuid::new_v4().to_string();
        let snapshot = {
            let mut state = self.state.lock().await;
            state.begin(run_id.clone(), Utc::now());
            state.clone()
        };
        self.emit(&snapshot);

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(self.clone().drive(
            run_id.clone(),
            cancel_token.clone(),
            source,
            on_settled,
        ));

        *active = Some(ActiveRun {
            run_id,
            cancel_token,
            handle,
        });

        snapshot
    }

    /// Cancels any in-flight run and returns to idle.
    pub async fn cancel(&self) -> OperationState<T> {
        if let Some(run) = self.active.lock().await.take() {
            crate::log_info!("{}: cancelling run {}", self.name, run.run_id);
            run.cancel_token.cancel();
        }

        let snapshot = {
            let mut state = self.state.lock().await;
            state.reset();
            state.clone()
        };
        self.emit(&snapshot);
        snapshot
    }

    /// Waits for the active run's task to exit. Returns immediately when idle.
    #[cfg(test)]
    pub(crate) async fn join(&self) {
        let handle = self.active.lock().await.take().map(|run| run.handle);
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                crate::log_error!("{} run task failed to join: {err}", self.name);
            }
        }
    }

    async fn drive<F, Fut>(
        self,
        run_id: String,
        cancel_token: CancellationToken,
        source: F,
        on_settled: Option<SettleHook<T>>,
    ) where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, OperationError>> + Send + 'static,
    {
        tokio::select! {
            _ = cancel_token.cancelled() => return,
            _ = time::sleep(self.delay) => {}
        }

        let outcome = tokio::select! {
            _ = cancel_token.cancelled() => return,
            result = time::timeout(self.timeout, source()) => match result {
                Ok(outcome) => outcome,
                Err(_) => Err(OperationError::Timeout {
                    operation: self.name.to_string(),
                    after_ms: self.timeout.as_millis() as u64,
                }),
            },
        };

        self.settle(&run_id, outcome, on_settled).await;
    }

    async fn settle(
        &self,
        run_id: &str,
        outcome: Result<T, OperationError>,
        on_settled: Option<SettleHook<T>>,
    ) {
        let snapshot = {
            let mut state = self.state.lock().await;
            let now = Utc::now();
            let applied = match &outcome {
                Ok(payload) => state.resolve(run_id, payload.clone(), now),
                Err(err) => state.fail(run_id, err.to_string(), now),
            };
            if !applied {
                crate::log_warn!("{}: dropping stale completion for run {run_id}", self.name);
                return;
            }
            // Under the guard: nobody sees the settled status before the hook's effects.
            if let Some(hook) = on_settled {
                hook(&outcome);
            }
            state.clone()
        };

        match &outcome {
            Ok(_) => crate::log_info!("{}: run {run_id} resolved", self.name),
            Err(err) => {
                crate::log_warn!("{}: run {run_id} failed: {err}", self.name);
                self.notifier.operation_failed(err);
            }
        }

        self.emit(&snapshot);
    }

    fn emit(&self, snapshot: &OperationState<T>) {
        events::emit(self.sink.as_ref(), self.event, snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::RecordingSink;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    const EVENT: &str = "lookup-state-changed";

    fn operation(sink: Arc<RecordingSink>) -> SimulatedOperation<String> {
        SimulatedOperation::new(
            "lookup",
            EVENT,
            Duration::from_millis(2000),
            Duration::from_millis(500),
            sink,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_after_the_delay() {
        let sink = RecordingSink::shared();
        let op = operation(sink.clone());

        let pending = op.start(|| async { Ok("done".to_string()) }).await;
        assert_eq!(pending.status, OperationStatus::Pending);

        time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(op.status().await, OperationStatus::Pending);

        op.join().await;
        let state = op.snapshot().await;
        assert_eq!(state.status, OperationStatus::Resolved);
        assert_eq!(state.payload.as_deref(), Some("done"));

        let statuses: Vec<_> = sink
            .events_named(EVENT)
            .iter()
            .map(|e| e["status"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(statuses, vec!["pending", "resolved"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_completion() {
        let sink = RecordingSink::shared();
        let op = operation(sink.clone());
        let hook_calls = Arc::new(AtomicUsize::new(0));

        let calls = hook_calls.clone();
        op.start_with_hook(
            || async { Ok("late".to_string()) },
            Some(Box::new(move |_: &Result<String, OperationError>| {
                calls.fetch_add(1, Ordering::SeqCst);
            })),
        )
        .await;

        time::sleep(Duration::from_millis(500)).await;
        let state = op.cancel().await;
        assert_eq!(state.status, OperationStatus::Idle);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(op.status().await, OperationStatus::Idle);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_discards_payload_and_supersedes_previous_run() {
        let sink = RecordingSink::shared();
        let op = operation(sink);

        op.start(|| async { Ok("first".to_string()) }).await;
        time::sleep(Duration::from_millis(1000)).await;
        let restarted = op.start(|| async { Ok("second".to_string()) }).await;
        assert_eq!(restarted.payload, None);

        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(op.status().await, OperationStatus::Pending);

        op.join().await;
        assert_eq!(op.snapshot().await.payload.as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_source_times_out_into_failed() {
        let sink = RecordingSink::shared();
        let op = operation(sink.clone());

        op.start(|| async {
            time::sleep(Duration::from_secs(60)).await;
            Ok("never".to_string())
        })
        .await;
        op.join().await;

        let state = op.snapshot().await;
        assert_eq!(state.status, OperationStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("lookup did not finish within 500ms"));
        assert_eq!(sink.last(events::TOAST).unwrap()["level"], "error");
    }

    #[tokio::test(start_paused = true)]
    async fn hook_runs_before_the_settled_status_is_visible() {
        let op = operation(RecordingSink::shared());
        let state_was_locked = Arc::new(AtomicBool::new(false));

        let observer = op.clone();
        let flag = state_was_locked.clone();
        op.start_with_hook(
            || async { Ok("done".to_string()) },
            Some(Box::new(move |_: &Result<String, OperationError>| {
                flag.store(observer.state.try_lock().is_err(), Ordering::SeqCst);
            })),
        )
        .await;
        op.join().await;

        assert!(state_was_locked.load(Ordering::SeqCst));
        assert_eq!(op.status().await, OperationStatus::Resolved);
    }

    #[tokio::test(start_paused = true)]
    async fn upstream_failure_reaches_the_hook() {
        let sink = RecordingSink::shared();
        let op = operation(sink);
        let seen = Arc::new(std::sync::Mutex::new(None));

        let seen_clone = seen.clone();
        op.start_with_hook(
            || async { Err(OperationError::Upstream("index offline".into())) },
            Some(Box::new(move |outcome: &Result<String, OperationError>| {
                *seen_clone.lock().unwrap() = outcome.as_ref().err().cloned();
            })),
        )
        .await;
        op.join().await;

        assert_eq!(op.status().await, OperationStatus::Failed);
        assert_eq!(
            *seen.lock().unwrap(),
            Some(OperationError::Upstream("index offline".into()))
        );
    }
}
