use crate::{
    config::Config,
    errors::{ParleyError, ParleyResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatReply, ChatRequest},
};
use chrono::Utc;
use reqwest::Client;
use std::time::Instant;

/// HTTP client for the chat endpoint. Every failure comes back as
/// `ParleyError::Delivery`.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
    reject_error_status: bool,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            reject_error_status: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.chat_endpoint()).reject_error_status(config.reject_error_status)
    }

    pub fn reject_error_status(mut self, reject: bool) -> Self {
        self.reject_error_status = reject;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `message` and returns the reply text exactly as the server sent it.
    pub async fn send(&self, message: &str) -> ParleyResult<String> {
        let start_time = Instant::now();

        let result = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await;

        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.clone(),
            request_summary: format!("chat ({} chars)", message.chars().count()),
            response_status: result.as_ref().ok().map(|r| r.status().as_u16()),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        let response =
            result.map_err(|e| ParleyError::delivery_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            if self.reject_error_status {
                return Err(ParleyError::delivery_error(format!(
                    "Server returned error status {}",
                    status
                )));
            }
            log::warn!("Server returned {}; reading body as a reply anyway", status);
        }

        let reply: ChatReply = response.json().await.map_err(|e| {
            ParleyError::delivery_error(format!("Failed to parse chat response: {}", e))
        })?;

        Ok(reply.response)
    }
}
