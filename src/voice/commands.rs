use tauri::State;

use crate::{
    navigation::NavigationState,
    voice::{VoiceSearchController, VoiceSearchSession},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> VoiceSearchController {
    state.voice.clone()
}

#[tauri::command]
pub async fn get_voice_state(state: State<'_, AppState>) -> Result<VoiceSearchSession, String> {
    Ok(controller_from_state(&state).session().await)
}

#[tauri::command]
pub async fn open_voice_search(state: State<'_, AppState>) -> Result<VoiceSearchSession, String> {
    Ok(controller_from_state(&state).open_dialog().await)
}

#[tauri::command]
pub async fn retry_voice_search(state: State<'_, AppState>) -> Result<VoiceSearchSession, String> {
    Ok(controller_from_state(&state).try_again().await)
}

#[tauri::command]
pub async fn close_voice_search(state: State<'_, AppState>) -> Result<VoiceSearchSession, String> {
    Ok(controller_from_state(&state).close_dialog().await)
}

#[tauri::command]
pub async fn voice_search_now(state: State<'_, AppState>) -> Result<NavigationState, String> {
    controller_from_state(&state)
        .search_now(&state.navigation)
        .await
        .map_err(|e| e.to_string())
}
