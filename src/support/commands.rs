use tauri::State;

use crate::{
    support::{ChatState, SupportChatController},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> SupportChatController {
    state.support.clone()
}

#[tauri::command]
pub async fn get_chat_state(state: State<'_, AppState>) -> Result<ChatState, String> {
    Ok(controller_from_state(&state).state().await)
}

#[tauri::command]
pub async fn send_chat_message(
    state: State<'_, AppState>,
    text: String,
) -> Result<ChatState, String> {
    controller_from_state(&state)
        .send(&text)
        .await
        .map_err(|e| e.to_string())
}
