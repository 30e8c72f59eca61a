//! System-instruction construction
//!
//! The entire workspace is serialized into the instruction on every chat
//! turn; the remote service has no other memory of the user's data.

use crate::error::Result;
use crate::workspace::WorkspaceSnapshot;

pub fn build_system_instruction(context: &WorkspaceSnapshot) -> Result<String> {
    let emails = serde_json::to_string(&context.emails)?;
    let calendar = serde_json::to_string(&context.events)?;
    let notes = serde_json::to_string(&context.notes)?;

    Ok(format!(
        "You are \"OmniWork Assistant\", a high-performance productivity partner.\n\
         You have access to the user's workspace context:\n\
         - EMAILS: {emails}\n\
         - CALENDAR: {calendar}\n\
         - NOTES: {notes}\n\
         \n\
         Guidelines:\n\
         1. Help the user summarize long emails or busy days.\n\
         2. Answer specific questions about their schedule or communications.\n\
         3. Act like a \"Granola\" app assistant - when asked for meeting notes or \
         summaries, be concise and structured.\n\
         4. If the user asks to look for something, search the provided context first.\n\
         5. Be professional but helpful and proactive."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::Workspace;

    #[test]
    fn instruction_embeds_all_three_collections() {
        let snapshot = Workspace::seeded().snapshot();
        let instruction = build_system_instruction(&snapshot).unwrap();

        assert!(instruction.contains("sarah.jones@corp.com"));
        assert!(instruction.contains("Standup Meeting"));
        assert!(instruction.contains("Product Roadmap Ideas"));
    }

    #[test]
    fn empty_workspace_still_produces_an_instruction() {
        let snapshot = Workspace::blank().snapshot();
        let instruction = build_system_instruction(&snapshot).unwrap();

        assert!(instruction.contains("- EMAILS: []"));
        assert!(instruction.contains("- NOTES: []"));
    }
}
