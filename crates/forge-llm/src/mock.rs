//! Scripted in-process completion client.
//!
//! Replies are queued up front and handed out in order. A reply can be bound
//! to a prompt substring, and it can be gated on a [`Notify`] so a test
//! decides exactly when each in-flight call resolves.
//!
//! ```ignore
//! let gate = Arc::new(Notify::new());
//! let client = MockClient::new()
//!     .gated_reply(FIRST, gate.clone())
//!     .reply(SECOND);
//! // ... start the first call, then release it later:
//! gate.notify_one();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::LlmError;

/// What a scripted call resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Text(String),
    /// Resolves to [`LlmError::Api`].
    Fail { status: u16, message: String },
    /// Resolves to [`LlmError::RateLimited`].
    RateLimited { retry_after_secs: u64 },
}

struct Scripted {
    reply: MockReply,
    when: Option<String>,
    gate: Option<Arc<Notify>>,
}

/// Completion client that answers from a script instead of the network.
#[derive(Default)]
pub struct MockClient {
    script: Mutex<Vec<Scripted>>,
    requests: Mutex<Vec<CompletionRequest>>,
    calls: AtomicUsize,
}

impl MockClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next unmatched call.
    #[must_use]
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Text(text.into()), None, None)
    }

    /// Queue a reply for the next call whose messages contain `needle`.
    #[must_use]
    pub fn reply_when(self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.push(MockReply::Text(text.into()), Some(needle.into()), None)
    }

    /// Queue a reply that is held back until `gate` is notified.
    #[must_use]
    pub fn gated_reply(self, text: impl Into<String>, gate: Arc<Notify>) -> Self {
        self.push(MockReply::Text(text.into()), None, Some(gate))
    }

    /// Queue an API failure.
    #[must_use]
    pub fn fail(self, status: u16, message: impl Into<String>) -> Self {
        self.push(
            MockReply::Fail {
                status,
                message: message.into(),
            },
            None,
            None,
        )
    }

    /// Queue any reply with full control over matching and gating.
    #[must_use]
    pub fn script(self, reply: MockReply, when: Option<String>, gate: Option<Arc<Notify>>) -> Self {
        self.push(reply, when, gate)
    }

    fn push(self, reply: MockReply, when: Option<String>, gate: Option<Arc<Notify>>) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Scripted { reply, when, gate });
        self
    }

    /// Number of calls that have picked up a scripted reply so far.
    ///
    /// A gated call counts as soon as it starts waiting.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Scripted replies not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn take(&self, request: &CompletionRequest) -> Option<Scripted> {
        let text = request.text();
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        let index = script
            .iter()
            .position(|s| s.when.as_deref().is_some_and(|when| text.contains(when)))
            .or_else(|| script.iter().position(|s| s.when.is_none()))?;
        Some(script.remove(index))
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let scripted = self.take(&request);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(scripted) = scripted else {
            return Err(LlmError::Api {
                status: 500,
                message: "mock client has no scripted reply".to_string(),
            });
        };

        if let Some(gate) = scripted.gate {
            gate.notified().await;
        }

        match scripted.reply {
            MockReply::Text(text) if text.trim().is_empty() => Err(LlmError::EmptyResponse),
            MockReply::Text(text) => Ok(text),
            MockReply::Fail { status, message } => Err(LlmError::Api { status, message }),
            MockReply::RateLimited { retry_after_secs } => {
                Err(LlmError::RateLimited { retry_after_secs })
            }
        }
    }
}
