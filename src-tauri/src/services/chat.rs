//! Assistant chat service
//!
//! Owns the append-only transcript and the `Idle | AwaitingReply` state
//! machine. One request is in flight at a time by construction: the state
//! transition happens under the session lock before the remote call, and a
//! competing send observes it and bails without side effects.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::assistant::AssistantBackend;
use crate::config;
use crate::error::{AppError, Result};
use crate::models::ChatMessage;
use crate::workspace::SharedWorkspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

struct ChatSession {
    messages: Vec<ChatMessage>,
    state: ChatState,
}

impl ChatSession {
    fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(config::ASSISTANT_GREETING)],
            state: ChatState::Idle,
        }
    }
}

#[derive(Clone)]
pub struct ChatService {
    workspace: SharedWorkspace,
    backend: Arc<dyn AssistantBackend>,
    session: Arc<Mutex<ChatSession>>,
}

impl ChatService {
    pub fn new(workspace: SharedWorkspace, backend: Arc<dyn AssistantBackend>) -> Self {
        Self {
            workspace,
            backend,
            session: Arc::new(Mutex::new(ChatSession::seeded())),
        }
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.session.lock().await.messages.clone()
    }

    pub async fn state(&self) -> ChatState {
        self.session.lock().await.state
    }

    /// Send a user message and wait for the assistant reply.
    ///
    /// The user message is appended optimistically before the remote call.
    /// A remote failure is absorbed into a fixed fallback bubble; the
    /// transcript never loses the user's turn and the session always
    /// returns to `Idle`.
    pub async fn send(&self, text: &str) -> Result<ChatMessage> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }

        {
            let mut session = self.session.lock().await;
            if session.state == ChatState::AwaitingReply {
                return Err(AppError::ReplyPending);
            }
            session.messages.push(ChatMessage::user(text));
            session.state = ChatState::AwaitingReply;
        }

        // Full workspace snapshot on every turn; the remote service has no
        // other memory of the user's data.
        let snapshot = self.workspace.read().await.snapshot();
        let result = self.backend.chat(text, &snapshot).await;

        let mut session = self.session.lock().await;
        let reply = match result {
            Ok(content) if content.trim().is_empty() => {
                ChatMessage::assistant(config::ASSISTANT_EMPTY_REPLY)
            }
            Ok(content) => ChatMessage::assistant(content),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                ChatMessage::assistant(config::ASSISTANT_FALLBACK_REPLY)
            }
        };
        session.messages.push(reply.clone());
        session.state = ChatState::Idle;

        Ok(reply)
    }

    /// Drop the transcript back to the seeded greeting. Invoked when the
    /// assistant view unmounts; the session is never persisted.
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        *session = ChatSession::seeded();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::workspace::{Workspace, WorkspaceSnapshot};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend stub: replies with a fixed string, or fails when `reply`
    /// is `None`. Counts calls so tests can assert "never invoked".
    struct StubBackend {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssistantBackend for StubBackend {
        async fn chat(&self, _message: &str, _context: &WorkspaceSnapshot) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| AppError::Assistant("connection refused".to_string()))
        }

        async fn transcribe_audio(&self, _audio: &[u8]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| AppError::Assistant("connection refused".to_string()))
        }
    }

    fn service_with(backend: Arc<StubBackend>) -> ChatService {
        ChatService::new(Workspace::seeded().into_shared(), backend)
    }

    #[tokio::test]
    async fn transcript_is_seeded_with_the_greeting() {
        let service = service_with(Arc::new(StubBackend::replying("hi")));

        let messages = service.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, config::ASSISTANT_GREETING);
    }

    #[tokio::test]
    async fn send_appends_user_and_assistant_turns() {
        let backend = Arc::new(StubBackend::replying("You have one priority email."));
        let service = service_with(backend.clone());

        let reply = service.send("What's urgent?").await.unwrap();

        assert_eq!(reply.content, "You have one priority email.");
        let messages = service.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "What's urgent?");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(backend.call_count(), 1);
        assert_eq!(service.state().await, ChatState::Idle);
    }

    #[tokio::test]
    async fn blank_input_appends_nothing_and_never_calls_the_backend() {
        let backend = Arc::new(StubBackend::replying("hi"));
        let service = service_with(backend.clone());

        assert!(matches!(
            service.send("").await,
            Err(AppError::EmptyMessage)
        ));
        assert!(matches!(
            service.send("   ").await,
            Err(AppError::EmptyMessage)
        ));

        assert_eq!(service.messages().await.len(), 1);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_call_becomes_exactly_one_fallback_bubble() {
        let service = service_with(Arc::new(StubBackend::failing()));

        let reply = service.send("hello?").await.unwrap();

        assert_eq!(reply.content, config::ASSISTANT_FALLBACK_REPLY);
        let messages = service.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, config::ASSISTANT_FALLBACK_REPLY);
        assert_eq!(service.state().await, ChatState::Idle);
    }

    #[tokio::test]
    async fn empty_model_reply_becomes_the_canned_apology() {
        let service = service_with(Arc::new(StubBackend::replying("   ")));

        let reply = service.send("hello?").await.unwrap();

        assert_eq!(reply.content, config::ASSISTANT_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn second_send_while_awaiting_reply_is_rejected() {
        let backend = Arc::new(StubBackend::replying("ok"));
        let service = service_with(backend.clone());

        // Force the pending state directly; the remote stub resolves too
        // fast to race against.
        service.session.lock().await.state = ChatState::AwaitingReply;

        let err = service.send("second").await.unwrap_err();
        assert!(matches!(err, AppError::ReplyPending));
        assert_eq!(service.messages().await.len(), 1);
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn chat_state_serializes_in_camel_case() {
        assert_eq!(
            serde_json::to_string(&ChatState::AwaitingReply).unwrap(),
            "\"awaitingReply\""
        );
        assert_eq!(serde_json::to_string(&ChatState::Idle).unwrap(), "\"idle\"");
    }

    #[tokio::test]
    async fn reset_returns_to_the_seeded_greeting() {
        let service = service_with(Arc::new(StubBackend::replying("ok")));
        service.send("hello").await.unwrap();
        assert_eq!(service.messages().await.len(), 3);

        service.reset().await;

        let messages = service.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, config::ASSISTANT_GREETING);
    }
}
