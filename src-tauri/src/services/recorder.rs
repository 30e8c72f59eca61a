//! Voice capture service
//!
//! The `Idle -> Recording -> Transcribing -> Idle` state machine behind the
//! journal's record button. The webview owns the microphone stream and
//! streams raw PCM chunks here; permission denials are handled on the
//! frontend by calling `cancel`, so a denied attempt never leaves `Idle`.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::assistant::AssistantBackend;
use crate::config;
use crate::error::{AppError, Result};
use crate::models::Note;
use crate::services::NotesService;

enum CaptureState {
    Idle,
    Recording(Vec<u8>),
    Transcribing,
}

/// Snapshot of the capture state for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecorderStatus {
    Idle,
    Recording,
    Transcribing,
}

#[derive(Clone)]
pub struct RecorderService {
    backend: Arc<dyn AssistantBackend>,
    notes: NotesService,
    state: Arc<Mutex<CaptureState>>,
}

impl RecorderService {
    pub fn new(backend: Arc<dyn AssistantBackend>, notes: NotesService) -> Self {
        Self {
            backend,
            notes,
            state: Arc::new(Mutex::new(CaptureState::Idle)),
        }
    }

    pub async fn status(&self) -> RecorderStatus {
        match *self.state.lock().await {
            CaptureState::Idle => RecorderStatus::Idle,
            CaptureState::Recording(_) => RecorderStatus::Recording,
            CaptureState::Transcribing => RecorderStatus::Transcribing,
        }
    }

    /// Begin buffering audio. Only valid from `Idle`; while a transcription
    /// is pending the UI is blocked from starting a new recording.
    pub async fn start(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        match *state {
            CaptureState::Idle => {
                tracing::info!("Recording started");
                *state = CaptureState::Recording(Vec::new());
                Ok(())
            }
            CaptureState::Recording(_) => {
                Err(AppError::Recorder("already recording".to_string()))
            }
            CaptureState::Transcribing => {
                Err(AppError::Recorder("transcription in progress".to_string()))
            }
        }
    }

    /// Append a chunk of raw audio. An overflowing chunk aborts the
    /// recording entirely; a half-captured clip is worthless.
    pub async fn push_chunk(&self, chunk: &[u8]) -> Result<()> {
        let mut state = self.state.lock().await;
        match &mut *state {
            CaptureState::Recording(buffer) => {
                if buffer.len() + chunk.len() > config::MAX_AUDIO_BUFFER_BYTES {
                    *state = CaptureState::Idle;
                    return Err(AppError::Recorder("recording too long".to_string()));
                }
                buffer.extend_from_slice(chunk);
                Ok(())
            }
            _ => Err(AppError::Recorder("not recording".to_string())),
        }
    }

    /// Stop recording and transcribe the buffered audio. On success a new
    /// `voice`-tagged note is created and selected; on failure no note is
    /// created. Either way the recorder returns to `Idle`.
    pub async fn stop(&self) -> Result<Note> {
        let audio = {
            let mut state = self.state.lock().await;
            match std::mem::replace(&mut *state, CaptureState::Transcribing) {
                CaptureState::Recording(buffer) => buffer,
                other => {
                    *state = other;
                    return Err(AppError::Recorder("not recording".to_string()));
                }
            }
        };

        tracing::info!("Recording stopped, transcribing {} bytes", audio.len());
        let result = self.backend.transcribe_audio(&audio).await;

        *self.state.lock().await = CaptureState::Idle;

        match result {
            Ok(text) => {
                let content = if text.trim().is_empty() {
                    config::TRANSCRIPTION_EMPTY_FALLBACK.to_string()
                } else {
                    text
                };
                Ok(self.notes.create_voice_note(content).await)
            }
            Err(e) => {
                tracing::warn!("Transcription failed: {}", e);
                Err(e)
            }
        }
    }

    /// Abort from any state back to `Idle`, dropping the buffer. Used when
    /// microphone access is denied or the user discards the recording.
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        if !matches!(*state, CaptureState::Idle) {
            tracing::info!("Recording cancelled");
        }
        *state = CaptureState::Idle;
    }
}
