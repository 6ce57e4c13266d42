// src/models.rs

use crate::constants::{SPINNER_FRAMES, TYPING_LABEL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

/// A single entry in the message list. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    origin: Origin,
}

impl Message {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Origin::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Bot)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

/// Placeholder shown while a reply is outstanding.
#[derive(Debug, Clone)]
pub struct TypingIndicator {
    label: String,
    spinner_idx: usize,
}

impl TypingIndicator {
    pub fn new() -> Self {
        Self {
            label: TYPING_LABEL.to_string(),
            spinner_idx: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }
}

impl Default for TypingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Successful reply from the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Logs details of each API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
}
