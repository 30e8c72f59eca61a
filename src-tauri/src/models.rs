//! Domain models
//!
//! Plain records shared between the backend and the webview.
//! All models use serde with camelCase renames so the frontend
//! sees the field names it expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A received email. Seeded at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
    pub is_important: bool,
    pub is_read: bool,
}

/// A calendar event. Seeded at startup, read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
}

/// A journal note. Created by the user or by voice transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Note {
    /// New empty note with a fresh id, timestamped now.
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            timestamp: Utc::now(),
            tags: Vec::new(),
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the assistant transcript. Append-only, session scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The single active top-level screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    #[default]
    Dashboard,
    Notes,
    Outlook,
    Ai,
}

/// Sub-view selector local to the mail/calendar screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTab {
    #[default]
    Mail,
    Calendar,
}

/// Local state of the mail/calendar screen. The `connected` flag models a
/// one-time, non-persisted authorization step; no real handshake happens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailPane {
    pub connected: bool,
    pub active_tab: MailTab,
    pub selected_email_id: Option<String>,
}

/// Read-only aggregation rendered by the dashboard view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Unread emails flagged important, in seed order.
    pub priority_emails: Vec<Email>,
    /// First event in the collection; seeding is responsible for ordering.
    pub next_event: Option<CalendarEvent>,
    /// First three emails, for the inbox teaser.
    pub recent_emails: Vec<Email>,
}
