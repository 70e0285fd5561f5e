//! Strategist chat transcript.
//!
//! Holds the ordered message log and the single-request gate: while a reply
//! is pending no further message can be sent. Provider failures degrade to a
//! canned fallback line instead of surfacing an error, so the transcript
//! always ends with a bot turn.

use tracing::warn;
use vault_content::ContentProvider;

/// Greeting seeded into every new transcript.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Investor Portal. I am the Vault Strategist. Ask me about any \
     asset track, or select one to begin the analysis.";

/// Reply used when the provider cannot be reached.
pub const FALLBACK_REPLY: &str =
    "The strategist is momentarily unavailable. The vault itself remains fully \
     operational: explore the asset tracks while the connection recovers.";

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The person driving the session.
    User,
    /// The strategist assistant.
    Bot,
}

/// One turn in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message author.
    pub speaker: Speaker,
    /// Message text.
    pub text: String,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

/// Chat transcript plus the pending-reply gate.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatSession {
    /// New transcript seeded with [`WELCOME_MESSAGE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            loading: false,
        }
    }

    /// Full transcript, oldest first.
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is pending.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sends a user message and appends the strategist's reply.
    ///
    /// Blank messages and messages sent while a reply is pending are
    /// rejected without touching the transcript. The `context_hint`
    /// describes where in the vault the user currently is, so the reply can
    /// reference it. Returns whether the message was accepted.
    pub async fn send(
        &mut self,
        provider: &dyn ContentProvider,
        text: &str,
        context_hint: &str,
    ) -> bool {
        let text = text.trim();
        if text.is_empty() || self.loading {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        self.loading = true;
        let reply = match provider.chat(text, context_hint).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "chat provider failed, using fallback reply");
                FALLBACK_REPLY.to_owned()
            }
        };
        self.messages.push(ChatMessage::bot(reply));
        self.loading = false;
        true
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
