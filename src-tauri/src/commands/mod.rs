//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `navigation`: view switching and the dashboard aggregation
//! - `mail`: mail/calendar pane state and read-only listings
//! - `notes`: journal CRUD, search, and selection
//! - `assistant`: chat session and the voice-capture flow

pub mod assistant;
pub mod mail;
pub mod navigation;
pub mod notes;

use crate::error::Result;

// Re-export all commands for convenient registration in main.rs
pub use assistant::*;
pub use mail::*;
pub use navigation::*;
pub use notes::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info() -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
}
