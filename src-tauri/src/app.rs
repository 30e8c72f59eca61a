//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use std::sync::Arc;

use tauri::{App, Manager};

use crate::assistant::{AssistantBackend, GeminiClient, GeminiConfig};
use crate::error::Result;
use crate::models::AppView;
use crate::services::{ChatService, NotesService, RecorderService};
use crate::workspace::{SharedWorkspace, Workspace};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub workspace: SharedWorkspace,
    pub notes: NotesService,
    pub chat: ChatService,
    pub recorder: RecorderService,
}

impl AppState {
    pub fn new(workspace: SharedWorkspace, backend: Arc<dyn AssistantBackend>) -> Self {
        let notes = NotesService::new(workspace.clone());
        let chat = ChatService::new(workspace.clone(), backend.clone());
        let recorder = RecorderService::new(backend, notes.clone());

        Self {
            workspace,
            notes,
            chat,
            recorder,
        }
    }

    /// Switch the focused view. Leaving the assistant view discards the
    /// chat transcript; the session is scoped to one visit.
    pub async fn set_view(&self, view: AppView) -> AppView {
        let previous = {
            let mut ws = self.workspace.write().await;
            std::mem::replace(&mut ws.current_view, view)
        };

        if previous == AppView::Ai && view != AppView::Ai {
            self.chat.reset().await;
        }

        tracing::debug!("View changed: {:?} -> {:?}", previous, view);
        view
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let workspace = Workspace::seeded().into_shared();
    let backend: Arc<dyn AssistantBackend> = Arc::new(GeminiClient::new(GeminiConfig::from_env()));

    let state = AppState::new(workspace, backend);
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
