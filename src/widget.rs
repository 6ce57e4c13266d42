use crate::api::ChatClient;
use crate::constants::FALLBACK_REPLY;
use crate::input::InputField;
use crate::message_list::MessageList;
use crate::models::{Message, Origin};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// View elements owned by the widget. Shared between the UI loop and the
/// in-flight send tasks.
#[derive(Debug)]
pub struct ChatState {
    pub messages: MessageList,
    pub input: InputField,
}

/// Wires user intent to the chat endpoint and keeps the message list and
/// typing indicator in step with each send.
#[derive(Clone)]
pub struct ChatWidget {
    state: Arc<Mutex<ChatState>>,
    client: Arc<ChatClient>,
}

impl ChatWidget {
    pub fn new(messages: MessageList, input: InputField, client: ChatClient) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState { messages, input })),
            client: Arc::new(client),
        }
    }

    pub fn state(&self) -> &Arc<Mutex<ChatState>> {
        &self.state
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    pub async fn render_message(&self, text: impl Into<String>, origin: Origin) {
        self.state
            .lock()
            .await
            .messages
            .push(Message::new(text, origin));
    }

    pub async fn show_typing(&self) {
        self.state.lock().await.messages.show_typing();
    }

    pub async fn hide_typing(&self) {
        self.state.lock().await.messages.hide_typing();
    }

    /// Sends whatever is in the input field. Blank input is ignored. The user
    /// message, cleared input and typing indicator are all in place before
    /// the request is issued; the returned handle resolves once the reply
    /// (or the fallback) has been rendered.
    pub async fn send_current_input(&self) -> Option<JoinHandle<()>> {
        let text = {
            let mut state = self.state.lock().await;
            let text = state.input.trimmed()?.to_string();
            state.messages.push(Message::user(text.clone()));
            state.input.clear();
            state.messages.show_typing();
            text
        };

        let widget = self.clone();
        Some(tokio::spawn(async move {
            widget.deliver(&text).await;
        }))
    }

    async fn deliver(&self, text: &str) {
        let outcome = self.client.send(text).await;

        let mut state = self.state.lock().await;
        state.messages.hide_typing();
        match outcome {
            Ok(reply) => state.messages.push(Message::bot(reply)),
            Err(e) => {
                log::error!("Error: {}", e);
                state.messages.push(Message::bot(FALLBACK_REPLY));
            }
        }
    }
}
