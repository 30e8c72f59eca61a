//! Navigation commands
//!
//! The shell owns a single `currentView` selector; exactly one view is
//! active at a time and the default is the dashboard.

use tauri::State;

use crate::app::AppState;
use crate::error::Result;
use crate::models::{AppView, DashboardSummary};

#[tauri::command]
pub async fn get_view(state: State<'_, AppState>) -> Result<AppView> {
    Ok(state.workspace.read().await.current_view)
}

/// Switch the focused view. Leaving the assistant view discards the chat
/// transcript; the session is scoped to one visit.
#[tauri::command]
pub async fn set_view(state: State<'_, AppState>, view: AppView) -> Result<AppView> {
    Ok(state.set_view(view).await)
}

/// Read-only aggregation for the dashboard: priority emails, the next
/// event, and a short inbox teaser. Mutates nothing.
#[tauri::command]
pub async fn get_dashboard(state: State<'_, AppState>) -> Result<DashboardSummary> {
    Ok(state.workspace.read().await.dashboard_summary())
}
