//! Chat widget state: open/closed flag and the conversation transcript.
//!
//! DESIGN
//! ======
//! The transcript stores only user/assistant turns. The system prompt lives
//! in the site config and is prepended exactly once when each outgoing
//! request is built, so it can never be duplicated no matter how many
//! exchanges accumulate. `in_flight` serializes sends: while a request is
//! outstanding, new send attempts are ignored rather than queued.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::SiteConfig;
use crate::net::chat::{BotReply, WireMessage};

/// Assistant text rendered when the chat endpoint fails in any way.
pub const FALLBACK_TEXT: &str =
    "Désolé, je rencontre un problème technique. Veuillez nous contacter directement.";

/// Quick replies offered with the fallback message.
pub const FALLBACK_SUGGESTIONS: [&str; 2] = ["Appeler", "Email"];

/// Who authored a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single conversation turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Quick replies rendered under an assistant turn. Never `Some(empty)`.
    pub suggestions: Option<Vec<String>>,
}

impl ChatTurn {
    pub fn user(content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content,
            suggestions: None,
        }
    }

    pub fn assistant(content: String, suggestions: Option<Vec<String>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content,
            suggestions: suggestions.filter(|labels| !labels.is_empty()),
        }
    }

    pub fn fallback() -> Self {
        Self::assistant(
            FALLBACK_TEXT.to_owned(),
            Some(FALLBACK_SUGGESTIONS.iter().map(|s| (*s).to_owned()).collect()),
        )
    }
}

/// State for the chat widget.
///
/// In the component, this lives in an `RwSignal` provided via context.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub is_open: bool,
    pub in_flight: bool,
    pub turns: Vec<ChatTurn>,
}

impl ChatState {
    /// Flip the window. The first open with an empty transcript seeds the
    /// configured welcome turn; reopening never reseeds.
    pub fn toggle_open(&mut self, config: &SiteConfig) {
        self.is_open = !self.is_open;
        if self.is_open && self.turns.is_empty() {
            self.turns.push(ChatTurn::assistant(
                config.chatbot_welcome.clone(),
                Some(config.chatbot_suggestions.clone()),
            ));
        }
    }

    pub fn push_user(&mut self, content: String) {
        self.turns.push(ChatTurn::user(content));
    }

    pub fn push_assistant(&mut self, content: String, suggestions: Option<Vec<String>>) {
        self.turns.push(ChatTurn::assistant(content, suggestions));
    }

    pub fn push_fallback(&mut self) {
        self.turns.push(ChatTurn::fallback());
    }

    /// Accept a user turn and mark the exchange in flight, returning the
    /// request body to send. Returns `None` while another request is
    /// outstanding: overlapping sends are dropped, not queued.
    pub fn begin_exchange(&mut self, content: String, prompt: &str) -> Option<Vec<WireMessage>> {
        if self.in_flight {
            return None;
        }
        self.push_user(content);
        self.in_flight = true;
        Some(self.outgoing_messages(prompt))
    }

    /// Record the outcome of an exchange and clear the in-flight flag. Any
    /// error collapses into the fixed fallback turn.
    pub fn finish_exchange(&mut self, reply: Result<BotReply, String>) {
        match reply {
            Ok(bot) => self.push_assistant(bot.text, bot.suggestions),
            Err(_) => self.push_fallback(),
        }
        self.in_flight = false;
    }

    /// Build the outgoing request body: the system prompt, then every
    /// transcript turn in order.
    pub fn outgoing_messages(&self, prompt: &str) -> Vec<WireMessage> {
        let mut messages = Vec::with_capacity(self.turns.len() + 1);
        messages.push(WireMessage {
            role: "system".to_owned(),
            content: prompt.to_owned(),
        });
        for turn in &self.turns {
            messages.push(WireMessage {
                role: turn.role.as_str().to_owned(),
                content: turn.content.clone(),
            });
        }
        messages
    }
}
