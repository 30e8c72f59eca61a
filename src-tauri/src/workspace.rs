//! In-memory workspace state
//!
//! The single owner of all shared domain data: emails, events, notes, the
//! current view, and the mail-pane state. There is no persistence layer;
//! the workspace is seeded once at startup and discarded on exit.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::{AppView, CalendarEvent, DashboardSummary, Email, MailPane, Note};
use crate::seed;

/// Handle shared between services and commands.
pub type SharedWorkspace = Arc<RwLock<Workspace>>;

#[derive(Debug)]
pub struct Workspace {
    pub emails: Vec<Email>,
    pub events: Vec<CalendarEvent>,
    pub notes: Vec<Note>,
    pub current_view: AppView,
    pub mail: MailPane,
    pub selected_note_id: Option<String>,
}

/// The combined current state of emails, events, and notes, embedded as
/// context in every assistant request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub emails: Vec<Email>,
    pub events: Vec<CalendarEvent>,
    pub notes: Vec<Note>,
}

impl Workspace {
    /// Workspace populated with the startup fixtures.
    pub fn seeded() -> Self {
        Self {
            emails: seed::emails(),
            events: seed::events(),
            notes: seed::notes(),
            current_view: AppView::default(),
            mail: MailPane::default(),
            selected_note_id: None,
        }
    }

    /// Empty workspace, used by tests that want full control over seeding.
    pub fn blank() -> Self {
        Self {
            emails: Vec::new(),
            events: Vec::new(),
            notes: Vec::new(),
            current_view: AppView::default(),
            mail: MailPane::default(),
            selected_note_id: None,
        }
    }

    pub fn into_shared(self) -> SharedWorkspace {
        Arc::new(RwLock::new(self))
    }

    /// Clone of the full domain state, re-sent to the assistant on every
    /// chat turn. Payload size grows with the workspace; that is the
    /// remote service's entire "memory".
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            emails: self.emails.clone(),
            events: self.events.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Select an email for the detail pane. `None` returns to the list; an
    /// unknown id leaves the selection untouched. Selection is a stored id
    /// only; emails never change after seeding.
    pub fn select_email(&mut self, id: Option<String>) {
        match id {
            Some(id) => {
                if self.emails.iter().any(|e| e.id == id) {
                    self.mail.selected_email_id = Some(id);
                }
            }
            None => self.mail.selected_email_id = None,
        }
    }

    /// Derivations for the dashboard view. Does not sort: "next event" is
    /// simply the first element of the events collection.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            priority_emails: self
                .emails
                .iter()
                .filter(|e| e.is_important && !e.is_read)
                .cloned()
                .collect(),
            next_event: self.events.first().cloned(),
            recent_emails: self.emails.iter().take(3).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_emails_are_important_and_unread() {
        let ws = Workspace::seeded();
        let summary = ws.dashboard_summary();

        let ids: Vec<&str> = summary.priority_emails.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn next_event_is_first_in_seed_order() {
        let ws = Workspace::seeded();
        let summary = ws.dashboard_summary();

        assert_eq!(summary.next_event.unwrap().id, "e1");
    }

    #[test]
    fn selecting_an_email_never_mutates_the_collection() {
        let mut ws = Workspace::seeded();

        ws.select_email(Some("1".to_string()));

        assert_eq!(ws.mail.selected_email_id.as_deref(), Some("1"));
        let selected = ws.emails.iter().find(|e| e.id == "1").unwrap();
        assert!(!selected.is_read);

        // The priority derivation is stable for the whole session.
        let summary = ws.dashboard_summary();
        let ids: Vec<&str> = summary
            .priority_emails
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn selecting_an_unknown_email_is_a_noop() {
        let mut ws = Workspace::seeded();
        ws.select_email(Some("1".to_string()));

        ws.select_email(Some("missing".to_string()));
        assert_eq!(ws.mail.selected_email_id.as_deref(), Some("1"));

        ws.select_email(None);
        assert_eq!(ws.mail.selected_email_id, None);
    }

    #[test]
    fn blank_workspace_has_no_next_event() {
        let ws = Workspace::blank();
        let summary = ws.dashboard_summary();

        assert!(summary.priority_emails.is_empty());
        assert!(summary.next_event.is_none());
        assert!(summary.recent_emails.is_empty());
    }
}
