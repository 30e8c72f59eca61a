//! Note-related commands
//!
//! CRUD operations, search, and selection for the journal.

use tauri::State;

use crate::app::AppState;
use crate::error::Result;
use crate::models::Note;

/// Create a new empty note at the front of the journal and select it
#[tauri::command]
pub async fn create_note(state: State<'_, AppState>) -> Result<Note> {
    Ok(state.notes.create_note().await)
}

/// List all notes, newest first
#[tauri::command]
pub async fn list_notes(state: State<'_, AppState>) -> Result<Vec<Note>> {
    Ok(state.notes.list_notes().await)
}

/// Merge a partial update into a note; `None` when the id does not exist
#[tauri::command]
pub async fn update_note(
    state: State<'_, AppState>,
    id: String,
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<Option<Note>> {
    Ok(state.notes.update_note(&id, title, content, tags).await)
}

/// Permanently delete a note; a missing id is a silent no-op
#[tauri::command]
pub async fn delete_note(state: State<'_, AppState>, id: String) -> Result<()> {
    state.notes.delete_note(&id).await;
    Ok(())
}

/// Case-insensitive substring search over titles and content
#[tauri::command]
pub async fn search_notes(state: State<'_, AppState>, query: String) -> Result<Vec<Note>> {
    Ok(state.notes.search_notes(&query).await)
}

/// Set or clear the journal selection
#[tauri::command]
pub async fn select_note(state: State<'_, AppState>, id: Option<String>) -> Result<()> {
    state.notes.select_note(id).await;
    Ok(())
}

#[tauri::command]
pub async fn get_selected_note(state: State<'_, AppState>) -> Result<Option<String>> {
    Ok(state.notes.selected_note_id().await)
}
