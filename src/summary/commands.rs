use tauri::State;

use crate::{
    operations::OperationState,
    summary::{document, Document, DocumentSummary, SummaryController},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> SummaryController {
    state.summary.clone()
}

#[tauri::command]
pub fn get_document() -> Result<Document, String> {
    Ok(document::nep_2020())
}

#[tauri::command]
pub async fn get_summary_state(
    state: State<'_, AppState>,
) -> Result<OperationState<DocumentSummary>, String> {
    Ok(controller_from_state(&state).state().await)
}

#[tauri::command]
pub async fn generate_summary(
    state: State<'_, AppState>,
) -> Result<OperationState<DocumentSummary>, String> {
    Ok(controller_from_state(&state).generate().await)
}

#[tauri::command]
pub async fn generate_new_summary(
    state: State<'_, AppState>,
) -> Result<OperationState<DocumentSummary>, String> {
    Ok(controller_from_state(&state).generate_new().await)
}

#[tauri::command]
pub async fn reset_summary(
    state: State<'_, AppState>,
) -> Result<OperationState<DocumentSummary>, String> {
    Ok(controller_from_state(&state).reset().await)
}
