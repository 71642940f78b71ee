//! Command gateway — the four remote operations.
//!
//! Each operation follows the same policy:
//! 1. Probe connectivity
//! 2. Unreachable → return the operation's static fallback, skip the call
//! 3. Reachable → one HTTP call; a transport or decode failure yields the
//!    operation's static error envelope, otherwise the body is returned as-is
//!
//! No retries, no queueing, no deduplication. Callers serialize.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};
use talksy_types::{envelope::ApiResponse, Result};

use crate::fallback;
use crate::ports::{AssistantPort, HttpPort};
use crate::prober::ConnectivityProber;

/// Backend routes
pub mod routes {
    pub const GREET: &str = "/greet";
    pub const PROCESS_TEXT: &str = "/process-text";
    pub const LISTEN: &str = "/listen";
    pub const SPEAK: &str = "/speak";
}

pub struct CommandGateway {
    http: Rc<dyn HttpPort>,
    prober: ConnectivityProber,
}

enum Call<'a> {
    Get(&'a str),
    Post(&'a str, Option<Value>),
}

impl Call<'_> {
    fn route(&self) -> &str {
        match self {
            Call::Get(path) | Call::Post(path, _) => path,
        }
    }
}

impl CommandGateway {
    pub fn new(http: Rc<dyn HttpPort>, probe_timeout_ms: u64) -> Self {
        let prober = ConnectivityProber::new(http.clone(), probe_timeout_ms);
        Self { http, prober }
    }

    /// Probe, then call. `unreachable` and `failed` build the two fallback tiers.
    async fn guarded(
        &self,
        call: Call<'_>,
        unreachable: impl FnOnce() -> ApiResponse,
        failed: impl FnOnce() -> ApiResponse,
    ) -> ApiResponse {
        if !self.prober.probe().await {
            log::warn!("Backend unreachable, using fallback for {}", call.route());
            return unreachable();
        }

        let route = call.route().to_string();
        match self.send(call).await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("API error ({}): {}", route, e);
                failed()
            }
        }
    }

    async fn send(&self, call: Call<'_>) -> Result<ApiResponse> {
        let reply = match call {
            Call::Get(path) => self.http.get(path, None).await?,
            Call::Post(path, body) => self.http.post(path, body.as_ref()).await?,
        };
        if !reply.is_success() {
            // The body is still decoded; error bodies usually carry no envelope fields
            log::warn!("Backend answered HTTP {}", reply.status);
        }
        reply.json()
    }
}

#[async_trait(?Send)]
impl AssistantPort for CommandGateway {
    async fn check_connection(&self) -> bool {
        self.prober.probe().await
    }

    async fn get_greeting(&self) -> Result<ApiResponse> {
        Ok(self
            .guarded(
                Call::Get(routes::GREET),
                fallback::unreachable_greeting,
                fallback::failed_greeting,
            )
            .await)
    }

    async fn process_text_command(&self, command: &str) -> Result<ApiResponse> {
        Ok(self
            .guarded(
                Call::Post(routes::PROCESS_TEXT, Some(json!({ "command": command }))),
                || fallback::unreachable_text_command(command),
                fallback::failed_text_command,
            )
            .await)
    }

    async fn listen_for_command(&self) -> Result<ApiResponse> {
        Ok(self
            .guarded(
                Call::Post(routes::LISTEN, None),
                fallback::unreachable_listen,
                fallback::failed_listen,
            )
            .await)
    }

    async fn speak(&self, text: &str) -> Result<ApiResponse> {
        Ok(self
            .guarded(
                Call::Post(routes::SPEAK, Some(json!({ "text": text }))),
                fallback::unreachable_speak,
                fallback::failed_speak,
            )
            .await)
    }
}
