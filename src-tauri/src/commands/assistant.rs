//! Assistant commands
//!
//! Chat session operations plus the voice-capture flow. Chat failures are
//! absorbed by the service into a fallback bubble; transcription failures
//! surface to the caller so the frontend can alert without creating a note.

use tauri::State;

use crate::app::AppState;
use crate::error::Result;
use crate::models::{ChatMessage, Note};
use crate::services::chat::ChatState;
use crate::services::recorder::RecorderStatus;

// ===== Chat =====

#[tauri::command]
pub async fn list_chat_messages(state: State<'_, AppState>) -> Result<Vec<ChatMessage>> {
    Ok(state.chat.messages().await)
}

#[tauri::command]
pub async fn get_chat_state(state: State<'_, AppState>) -> Result<ChatState> {
    Ok(state.chat.state().await)
}

/// Send a user message and wait for the assistant's reply. Empty input and
/// sends while a reply is pending are rejected without side effects.
#[tauri::command]
pub async fn send_chat_message(
    state: State<'_, AppState>,
    text: String,
) -> Result<ChatMessage> {
    state.chat.send(&text).await
}

/// Drop the transcript back to the seeded greeting
#[tauri::command]
pub async fn reset_chat(state: State<'_, AppState>) -> Result<()> {
    state.chat.reset().await;
    Ok(())
}

// ===== Voice Capture =====

#[tauri::command]
pub async fn get_recorder_status(state: State<'_, AppState>) -> Result<RecorderStatus> {
    Ok(state.recorder.status().await)
}

#[tauri::command]
pub async fn start_recording(state: State<'_, AppState>) -> Result<()> {
    state.recorder.start().await
}

/// Buffer a chunk of raw PCM audio captured by the webview
#[tauri::command]
pub async fn push_audio_chunk(state: State<'_, AppState>, chunk: Vec<u8>) -> Result<()> {
    state.recorder.push_chunk(&chunk).await
}

/// Stop recording and transcribe; returns the freshly created voice note
#[tauri::command]
pub async fn stop_recording(state: State<'_, AppState>) -> Result<Note> {
    state.recorder.stop().await
}

/// Abort the capture flow, e.g. when microphone access is denied
#[tauri::command]
pub async fn cancel_recording(state: State<'_, AppState>) -> Result<()> {
    state.recorder.cancel().await;
    Ok(())
}
