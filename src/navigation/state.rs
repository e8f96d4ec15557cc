use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Dashboard,
    Results,
    Document,
    Analytics,
    Support,
    About,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Results,
        Page::Document,
        Page::Analytics,
        Page::Support,
        Page::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Results => "results",
            Page::Document => "document",
            Page::Analytics => "analytics",
            Page::Support => "support",
            Page::About => "about",
        }
    }

    /// Route keys are exact; anything unknown lands on the dashboard.
    pub fn from_id_or_default(id: &str) -> Page {
        id.parse().unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{0}'")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == value)
            .ok_or_else(|| UnknownPage(value.to_string()))
    }
}

/// Everything the shell needs to decide which screen and chrome to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub current_page: Page,
    pub is_logged_in: bool,
    pub sidebar_open: bool,
    pub login_overlay_open: bool,
    pub last_query: Option<String>,
}

impl NavigationState {
    pub fn new(is_logged_in: bool) -> Self {
        Self {
            is_logged_in,
            ..Self::default()
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
        self.sidebar_open = false;
    }

    pub fn login(&mut self) {
        self.is_logged_in = true;
        self.login_overlay_open = false;
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.navigate(Page::Dashboard);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn record_search(&mut self, query: String) {
        self.last_query = Some(query);
        self.navigate(Page::Results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip_through_from_str() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn unknown_or_miscased_ids_fall_back_to_dashboard() {
        assert_eq!(Page::from_id_or_default("settings"), Page::Dashboard);
        assert_eq!(Page::from_id_or_default("Analytics"), Page::Dashboard);
        assert_eq!(Page::from_id_or_default(""), Page::Dashboard);
    }

    #[test]
    fn unknown_page_error_names_the_id() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert_eq!(err, UnknownPage("settings".into()));
        assert_eq!(err.to_string(), "unknown page 'settings'");
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn last_navigation_wins() {
        let mut state = NavigationState::new(true);
        for page in [Page::Analytics, Page::Support, Page::Document] {
            state.navigate(page);
        }
        assert_eq!(state.current_page, Page::Document);
    }

    #[test]
    fn navigation_closes_the_sidebar() {
        let mut state = NavigationState::new(true);
        state.toggle_sidebar();
        assert!(state.sidebar_open);
        state.navigate(Page::About);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn logout_returns_to_dashboard() {
        let mut state = NavigationState::new(true);
        state.navigate(Page::Analytics);
        state.logout();
        assert_eq!(state.current_page, Page::Dashboard);
        assert!(!state.is_logged_in);
    }

    #[test]
    fn serializes_page_ids_in_camel_case() {
        let json = serde_json::to_value(NavigationState::default()).unwrap();
        assert_eq!(json["currentPage"], "dashboard");
        assert_eq!(json["sidebarOpen"], false);
    }
}
