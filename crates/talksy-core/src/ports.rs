//! Port traits — the hexagonal architecture boundary.
//!
//! `HttpPort` is implemented by the browser transport in `talksy-platform`.
//! `AssistantPort` is what the session controller talks to; the
//! [`CommandGateway`](crate::gateway::CommandGateway) is its production
//! implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use talksy_types::{envelope::ApiResponse, Result};

// ─── HTTP Port ───────────────────────────────────────────────

/// Raw reply from the backend: status code plus undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait(?Send)]
pub trait HttpPort {
    /// GET `path` relative to the backend origin. When `timeout_ms` is set the
    /// request is aborted and `TalksyError::Timeout` returned once it elapses.
    async fn get(&self, path: &str, timeout_ms: Option<u64>) -> Result<HttpReply>;

    /// POST `path` with an optional JSON body
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<HttpReply>;

    /// Backend origin this transport talks to (for logging/error copy)
    fn base_url(&self) -> &str;
}

// ─── Assistant Port ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait AssistantPort {
    /// Liveness check against the backend root
    async fn check_connection(&self) -> bool;

    async fn get_greeting(&self) -> Result<ApiResponse>;

    async fn process_text_command(&self, command: &str) -> Result<ApiResponse>;

    async fn listen_for_command(&self) -> Result<ApiResponse>;

    async fn speak(&self, text: &str) -> Result<ApiResponse>;
}
