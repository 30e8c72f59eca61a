//! Startup fixtures
//!
//! The workspace is seeded once with this data and never synced with a
//! backend; everything lives in memory and is lost on exit.

use chrono::{Duration, TimeZone, Utc};

use crate::models::{CalendarEvent, Email, Note};

pub fn emails() -> Vec<Email> {
    vec![
        Email {
            id: "1".to_string(),
            sender: "sarah.jones@corp.com".to_string(),
            subject: "Quarterly Project Update".to_string(),
            body: "Hi, I wanted to follow up on the Q3 milestones. Are we still on track \
                   for the October launch? We need the final documentation by Friday."
                .to_string(),
            received_at: Utc.with_ymd_and_hms(2024, 5, 20, 9, 30, 0).unwrap(),
            is_important: true,
            is_read: false,
        },
        Email {
            id: "2".to_string(),
            sender: "it-support@corp.com".to_string(),
            subject: "Mandatory Security Training".to_string(),
            body: "Please complete the security awareness training by EOD tomorrow to \
                   maintain access to internal systems."
                .to_string(),
            received_at: Utc.with_ymd_and_hms(2024, 5, 20, 10, 15, 0).unwrap(),
            is_important: false,
            is_read: true,
        },
        Email {
            id: "3".to_string(),
            sender: "mike.ross@design-team.com".to_string(),
            subject: "Feedback: New Landing Page".to_string(),
            body: "The latest designs look great. One small tweak: can we make the primary \
                   CTA button a bit larger on mobile views?"
                .to_string(),
            received_at: Utc.with_ymd_and_hms(2024, 5, 19, 16, 45, 0).unwrap(),
            is_important: true,
            is_read: true,
        },
    ]
}

/// Events in chronological order; the dashboard takes the first as "next".
pub fn events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "e1".to_string(),
            title: "Standup Meeting".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 5, 20, 10, 30, 0).unwrap(),
            location: Some("Microsoft Teams".to_string()),
        },
        CalendarEvent {
            id: "e2".to_string(),
            title: "Design Review".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap(),
            location: Some("Conference Room B".to_string()),
        },
        CalendarEvent {
            id: "e3".to_string(),
            title: "Client Demo: Phase 1".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 5, 21, 11, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 5, 21, 12, 0, 0).unwrap(),
            location: Some("Zoom".to_string()),
        },
    ]
}

pub fn notes() -> Vec<Note> {
    vec![Note {
        id: "n1".to_string(),
        title: "Product Roadmap Ideas".to_string(),
        content: "Focus on AI integration and mobile-first responsive design for the \
                  2024 H2 roadmap."
            .to_string(),
        timestamp: Utc::now() - Duration::days(1),
        tags: vec!["work".to_string(), "strategy".to_string()],
    }]
}
