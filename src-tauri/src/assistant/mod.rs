//! Assistant remote-model client
//!
//! Two stateless pass-through operations to the Gemini API: context-embedded
//! chat and audio transcription. No retries, no backoff, no streaming; each
//! call is a single request/response round trip.

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::error::Result;
use crate::workspace::WorkspaceSnapshot;

pub use gemini::{GeminiClient, GeminiConfig};

/// Seam between the UI flows and the hosted model, so chat and
/// transcription logic can be exercised against a scripted backend.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Send a user utterance with the full workspace snapshot embedded as a
    /// system instruction; returns the model's plain-text reply.
    async fn chat(&self, message: &str, context: &WorkspaceSnapshot) -> Result<String>;

    /// Send raw PCM audio (16 kHz) with the fixed transcription instruction;
    /// returns the transcribed text.
    async fn transcribe_audio(&self, audio: &[u8]) -> Result<String>;
}
