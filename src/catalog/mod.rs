//! Canned catalogue content served to the dashboard, results, analytics and
//! sidebar screens.

#[cfg(feature = "desktop")]
pub mod commands;
pub mod results;
pub mod screens;

pub use results::{ResultFilter, SearchResult, SearchResults, SortOrder};
pub use screens::{AnalyticsData, DashboardData, SidebarData};

pub const TOTAL_DOCUMENTS: u32 = 1247;
pub const ACTIVE_USERS: u32 = 3420;
