use tauri::State;

use crate::{
    catalog::{
        results, screens, AnalyticsData, DashboardData, ResultFilter, SearchResults, SidebarData,
    },
    AppState,
};

#[tauri::command]
pub async fn get_search_results(
    state: State<'_, AppState>,
    filter: Option<ResultFilter>,
) -> Result<SearchResults, String> {
    let query = state.navigation.snapshot().await.last_query;
    Ok(results::search(query, &filter.unwrap_or_default()))
}

#[tauri::command]
pub fn get_dashboard() -> Result<DashboardData, String> {
    Ok(screens::dashboard())
}

#[tauri::command]
pub fn get_analytics() -> Result<AnalyticsData, String> {
    Ok(screens::analytics())
}

#[tauri::command]
pub fn get_sidebar() -> Result<SidebarData, String> {
    Ok(screens::sidebar())
}
