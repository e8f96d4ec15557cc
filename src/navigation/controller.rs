use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use crate::{
    error::OperationError,
    events::{self, SharedSink},
    notifications::Notifier,
    session_store::SessionStore,
};

use super::{NavigationState, Page};

const ENABLE_LOGS: bool = true;

const WELCOME_MESSAGE: &str = "Welcome to Smart Information Retrieval System!";
const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Root owner of session and navigation state. All mutation goes through here.
#[derive(Clone)]
pub struct NavigationController {
    state: Arc<Mutex<NavigationState>>,
    store: Arc<SessionStore>,
    sink: SharedSink,
    notifier: Notifier,
}

impl NavigationController {
    pub fn new(store: Arc<SessionStore>, sink: SharedSink) -> Self {
        let state = NavigationState::new(store.is_logged_in());
        crate::log_info!("Navigation initialized (logged_in={})", state.is_logged_in);

        Self {
            state: Arc::new(Mutex::new(state)),
            store,
            notifier: Notifier::new(sink.clone()),
            sink,
        }
    }

    pub async fn snapshot(&self) -> NavigationState {
        self.state.lock().await.clone()
    }

    pub async fn navigate(&self, page: Page) -> NavigationState {
        self.mutate(|state| state.navigate(page)).await
    }

    /// Navigation by route key, for callers holding raw ids from the webview.
    pub async fn navigate_to(&self, page_id: &str) -> NavigationState {
        let page = Page::from_id_or_default(page_id);
        if page.as_str() != page_id {
            crate::log_warn!("Unknown page id '{page_id}', falling back to {page}");
        }
        self.navigate(page).await
    }

    pub async fn toggle_sidebar(&self) -> NavigationState {
        self.mutate(NavigationState::toggle_sidebar).await
    }

    pub async fn close_sidebar(&self) -> NavigationState {
        self.mutate(|state| state.sidebar_open = false).await
    }

    pub async fn show_login(&self) -> NavigationState {
        self.mutate(|state| state.login_overlay_open = true).await
    }

    pub async fn close_login(&self) -> NavigationState {
        self.mutate(|state| state.login_overlay_open = false).await
    }

    /// Memory is updated before the flag is written, so a storage failure
    /// still leaves the user logged in for this run.
    pub async fn login(&self) -> Result<NavigationState> {
        let snapshot = self.mutate(NavigationState::login).await;
        self.store.mark_logged_in()?;
        crate::log_info!("Session started");
        self.notifier.success(WELCOME_MESSAGE);
        Ok(snapshot)
    }

    /// Any non-empty credentials are accepted.
    pub async fn submit_login(&self, credentials: Credentials) -> Result<NavigationState> {
        if credentials.username.trim().is_empty() || credentials.password.trim().is_empty() {
            let err = OperationError::validation("Username and password are required");
            self.notifier.operation_failed(&err);
            return Err(err.into());
        }
        self.login().await
    }

    pub async fn logout(&self) -> Result<NavigationState> {
        let snapshot = self.mutate(NavigationState::logout).await;
        self.store.clear()?;
        crate::log_info!("Session ended");
        self.notifier.success(LOGGED_OUT_MESSAGE);
        Ok(snapshot)
    }

    pub async fn submit_search(&self, query: &str) -> Result<NavigationState, OperationError> {
        let query = query.trim();
        if query.is_empty() {
            let err = OperationError::validation("Please enter a search query");
            self.notifier.operation_failed(&err);
            return Err(err);
        }
        let query = query.to_string();
        crate::log_info!("Search submitted: {query}");
        Ok(self.mutate(move |state| state.record_search(query)).await)
    }

    async fn mutate<F>(&self, apply: F) -> NavigationState
    where
        F: FnOnce(&mut NavigationState),
    {
        let snapshot = {
            let mut guard = self.state.lock().await;
            apply(&mut *guard);
            guard.clone()
        };
        events::emit(self.sink.as_ref(), events::NAVIGATION_STATE_CHANGED, &snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::RecordingSink;

    fn controller_in(dir: &tempfile::TempDir) -> (NavigationController, Arc<RecordingSink>) {
        let store = Arc::new(SessionStore::open(dir.path().join("session.json")).unwrap());
        let sink = RecordingSink::shared();
        (NavigationController::new(store, sink.clone()), sink)
    }

    #[tokio::test]
    async fn starts_on_dashboard_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _) = controller_in(&dir);
        let state = controller.snapshot().await;
        assert_eq!(state.current_page, Page::Dashboard);
        assert!(!state.is_logged_in);
        assert!(!state.sidebar_open);
    }

    #[tokio::test]
    async fn unknown_route_key_lands_on_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _) = controller_in(&dir);
        controller.navigate(Page::Support).await;
        let state = controller.navigate_to("reports").await;
        assert_eq!(state.current_page, Page::Dashboard);

        let state = controller.navigate_to("analytics").await;
        assert_eq!(state.current_page, Page::Analytics);
    }

    #[tokio::test]
    async fn navigating_with_open_sidebar_closes_it() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, sink) = controller_in(&dir);
        assert!(controller.toggle_sidebar().await.sidebar_open);

        let state = controller.navigate(Page::Results).await;
        assert!(!state.sidebar_open);

        let last = sink.last(events::NAVIGATION_STATE_CHANGED).unwrap();
        assert_eq!(last["currentPage"], "results");
        assert_eq!(last["sidebarOpen"], false);
    }

    #[tokio::test]
    async fn logout_from_analytics_resets_page_and_flag() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, sink) = controller_in(&dir);
        controller.login().await.unwrap();
        controller.navigate(Page::Analytics).await;

        let state = controller.logout().await.unwrap();
        assert_eq!(state.current_page, Page::Dashboard);
        assert!(!state.is_logged_in);

        let toasts = sink.events_named(events::TOAST);
        assert_eq!(toasts.last().unwrap()["message"], LOGGED_OUT_MESSAGE);
    }

    #[tokio::test]
    async fn login_persists_across_restart_and_logout_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (controller, _) = controller_in(&dir);
            controller.show_login().await;
            let state = controller.login().await.unwrap();
            assert!(state.is_logged_in);
            assert!(!state.login_overlay_open);
        }

        let (reloaded, _) = controller_in(&dir);
        assert!(reloaded.snapshot().await.is_logged_in);

        reloaded.logout().await.unwrap();
        let (reloaded_again, _) = controller_in(&dir);
        assert!(!reloaded_again.snapshot().await.is_logged_in);
    }

    #[tokio::test]
    async fn closing_the_login_overlay_keeps_page_and_session() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, sink) = controller_in(&dir);
        controller.navigate(Page::About).await;

        assert!(controller.show_login().await.login_overlay_open);
        let state = controller.close_login().await;
        assert!(!state.login_overlay_open);
        assert!(!state.is_logged_in);
        assert_eq!(state.current_page, Page::About);

        let last = sink.last(events::NAVIGATION_STATE_CHANGED).unwrap();
        assert_eq!(last["loginOverlayOpen"], false);
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_with_a_toast() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, sink) = controller_in(&dir);
        let result = controller
            .submit_login(Credentials {
                username: "officer@education.gov.in".into(),
                password: "   ".into(),
            })
            .await;

        assert!(result.is_err());
        assert!(!controller.snapshot().await.is_logged_in);
        assert_eq!(sink.last(events::TOAST).unwrap()["level"], "error");
    }

    #[tokio::test]
    async fn search_records_query_and_opens_results() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _) = controller_in(&dir);

        let err = controller.submit_search("   ").await.unwrap_err();
        assert!(matches!(err, OperationError::Validation(_)));
        assert_eq!(controller.snapshot().await.current_page, Page::Dashboard);

        let state = controller.submit_search("  NEP 2020 ").await.unwrap();
        assert_eq!(state.current_page, Page::Results);
        assert_eq!(state.last_query.as_deref(), Some("NEP 2020"));
    }
}
