use tauri::State;

use crate::{
    navigation::{Credentials, NavigationController, NavigationState},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> NavigationController {
    state.navigation.clone()
}

#[tauri::command]
pub async fn get_navigation_state(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).snapshot().await)
}

#[tauri::command]
pub async fn navigate(state: State<'_, AppState>, page: String) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).navigate_to(&page).await)
}

#[tauri::command]
pub async fn toggle_sidebar(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).toggle_sidebar().await)
}

#[tauri::command]
pub async fn close_sidebar(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).close_sidebar().await)
}

#[tauri::command]
pub async fn show_login(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).show_login().await)
}

#[tauri::command]
pub async fn close_login(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(controller_from_state(&state).close_login().await)
}

#[tauri::command]
pub async fn submit_login(
    state: State<'_, AppState>,
    credentials: Credentials,
) -> Result<NavigationState, String> {
    controller_from_state(&state)
        .submit_login(credentials)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<NavigationState, String> {
    state.logout().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn submit_search(
    state: State<'_, AppState>,
    query: String,
) -> Result<NavigationState, String> {
    controller_from_state(&state)
        .submit_search(&query)
        .await
        .map_err(|e| e.to_string())
}
