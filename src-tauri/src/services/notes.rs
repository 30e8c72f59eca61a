//! Notes service
//!
//! Journal operations over the shared workspace: CRUD, search, selection,
//! and note creation for the voice-transcription flow. Unknown ids are
//! silent no-ops, never errors.

use chrono::{Local, Utc};

use crate::config;
use crate::models::Note;
use crate::workspace::SharedWorkspace;

#[derive(Clone)]
pub struct NotesService {
    workspace: SharedWorkspace,
}

impl NotesService {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    /// Create an empty note at the front of the collection and select it.
    pub async fn create_note(&self) -> Note {
        let note = Note::empty();
        tracing::info!("Creating new note: {}", note.id);

        let mut ws = self.workspace.write().await;
        ws.notes.insert(0, note.clone());
        ws.selected_note_id = Some(note.id.clone());

        note
    }

    /// Create a note from a completed transcription, tagged `voice`,
    /// inserted at the front and selected.
    pub async fn create_voice_note(&self, content: String) -> Note {
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            // Title carries the user's wall-clock time, not UTC.
            title: format!("Voice Note - {}", Local::now().format("%H:%M")),
            content,
            timestamp: Utc::now(),
            tags: vec![config::VOICE_NOTE_TAG.to_string()],
        };
        tracing::info!("Creating voice note: {}", note.id);

        let mut ws = self.workspace.write().await;
        ws.notes.insert(0, note.clone());
        ws.selected_note_id = Some(note.id.clone());

        note
    }

    pub async fn list_notes(&self) -> Vec<Note> {
        self.workspace.read().await.notes.clone()
    }

    /// Merge a partial update into the matching note. Returns the updated
    /// note, or `None` if the id does not exist.
    pub async fn update_note(
        &self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Option<Note> {
        let mut ws = self.workspace.write().await;
        let note = ws.notes.iter_mut().find(|n| n.id == id)?;

        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = content {
            note.content = content;
        }
        if let Some(tags) = tags {
            note.tags = tags;
        }

        tracing::debug!("Note updated: {}", id);
        Some(note.clone())
    }

    /// Permanently remove a note. Clears the selection if the deleted note
    /// was selected.
    pub async fn delete_note(&self, id: &str) {
        let mut ws = self.workspace.write().await;
        let before = ws.notes.len();
        ws.notes.retain(|n| n.id != id);

        if ws.notes.len() < before {
            tracing::info!("Note deleted: {}", id);
            if ws.selected_note_id.as_deref() == Some(id) {
                ws.selected_note_id = None;
            }
        }
    }

    /// Case-insensitive substring filter over title and content. Never
    /// mutates the underlying collection.
    pub async fn search_notes(&self, query: &str) -> Vec<Note> {
        let query_lower = query.to_lowercase();
        let ws = self.workspace.read().await;

        ws.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&query_lower)
                    || note.content.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect()
    }

    /// Set or clear the selection. Selecting an unknown id leaves the
    /// current selection untouched.
    pub async fn select_note(&self, id: Option<String>) {
        let mut ws = self.workspace.write().await;
        match id {
            Some(id) => {
                if ws.notes.iter().any(|n| n.id == id) {
                    ws.selected_note_id = Some(id);
                }
            }
            None => ws.selected_note_id = None,
        }
    }

    pub async fn selected_note_id(&self) -> Option<String> {
        self.workspace.read().await.selected_note_id.clone()
    }
}
