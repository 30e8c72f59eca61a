//! Services module
//!
//! Business logic coordinating between commands and the shared workspace.

pub mod chat;
pub mod notes;
pub mod recorder;

pub use chat::ChatService;
pub use notes::NotesService;
pub use recorder::RecorderService;
