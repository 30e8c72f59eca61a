//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and the fixed assistant copy used throughout the application.

// ===== Assistant Remote Endpoint =====

/// Environment variable holding the Gemini API key. Read once at startup;
/// absence is not validated locally and surfaces as a remote rejection.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for both chat and audio transcription.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Connect timeout for the shared HTTP client, in seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Overall request timeout, in seconds. Transcription of longer clips can
/// take a while, so this is generous.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

// ===== Voice Capture Limits =====

/// Upper bound on buffered raw PCM audio (16 kHz mono comes to roughly
/// 2 MB per minute). An overflowing chunk aborts the recording.
pub const MAX_AUDIO_BUFFER_BYTES: usize = 32 * 1024 * 1024;

/// MIME type declared for transcription uploads.
pub const AUDIO_MIME_TYPE: &str = "audio/pcm;rate=16000";

// ===== Fixed Assistant Copy =====

/// Greeting that seeds every assistant session.
pub const ASSISTANT_GREETING: &str = "Hello Alex! I'm your OmniWork Assistant. \
    I have context on your emails, calendar, and notes. How can I help you be \
    productive today?";

/// Shown as a chat bubble when the remote call fails; the error itself is
/// absorbed and never propagated.
pub const ASSISTANT_FALLBACK_REPLY: &str = "Oops! Something went wrong while \
    connecting to Gemini. Please check your connection.";

/// Shown when the model replies with empty text.
pub const ASSISTANT_EMPTY_REPLY: &str = "I'm sorry, I couldn't process that request.";

/// Note body used when transcription succeeds but returns no text.
pub const TRANSCRIPTION_EMPTY_FALLBACK: &str = "No content generated.";

/// Fixed instruction sent alongside every transcription request.
pub const TRANSCRIPTION_INSTRUCTION: &str = "Please transcribe this audio accurately. \
    If it's a meeting, format it with speaker labels if possible and bullet points \
    for key takeaways.";

/// Tag applied to notes created by the transcription flow.
pub const VOICE_NOTE_TAG: &str = "voice";
