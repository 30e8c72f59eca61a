//! Mail/calendar pane commands
//!
//! Emails and events are seeded, read-only collections; the pane state
//! (connected flag, active tab, selection) is local UI state held here so
//! it survives view switches within one session.

use tauri::State;

use crate::app::AppState;
use crate::error::Result;
use crate::models::{CalendarEvent, Email, MailPane, MailTab};

#[tauri::command]
pub async fn get_mail_pane(state: State<'_, AppState>) -> Result<MailPane> {
    Ok(state.workspace.read().await.mail.clone())
}

/// Flip the local "connected" flag. No real authorization handshake
/// happens; this is a one-time, non-persisted gate in front of the pane.
#[tauri::command]
pub async fn connect_mailbox(state: State<'_, AppState>) -> Result<MailPane> {
    let mut ws = state.workspace.write().await;
    ws.mail.connected = true;
    tracing::info!("Mailbox connected");
    Ok(ws.mail.clone())
}

#[tauri::command]
pub async fn set_mail_tab(state: State<'_, AppState>, tab: MailTab) -> Result<MailPane> {
    let mut ws = state.workspace.write().await;
    ws.mail.active_tab = tab;
    Ok(ws.mail.clone())
}

/// Select an email for the detail pane. `None` returns to the list. An
/// unknown id leaves the selection untouched; emails themselves are
/// never mutated.
#[tauri::command]
pub async fn select_email(
    state: State<'_, AppState>,
    id: Option<String>,
) -> Result<MailPane> {
    let mut ws = state.workspace.write().await;
    ws.select_email(id);
    Ok(ws.mail.clone())
}

#[tauri::command]
pub async fn list_emails(state: State<'_, AppState>) -> Result<Vec<Email>> {
    Ok(state.workspace.read().await.emails.clone())
}

#[tauri::command]
pub async fn list_events(state: State<'_, AppState>) -> Result<Vec<CalendarEvent>> {
    Ok(state.workspace.read().await.events.clone())
}
