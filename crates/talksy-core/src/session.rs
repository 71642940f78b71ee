//! Session controller, the single owner of conversation state.
//!
//! Holds the ordered history, the loading/listening flags and the
//! connection status. All mutation goes through the transition functions
//! below. Network work is split out into [`PendingCall::run`] so the UI can
//! spawn it without holding the controller across an await:
//!
//! ```text
//! begin_*  ──► PendingCall ──run(port)──► SessionEvent ──apply──► state
//! ```
//!
//! Every call carries a generation number. Stopping the microphone only
//! abandons the capture: its reply is still awaited with the loading guard
//! held, and when it lands it releases the guard without touching history
//! or status. Connectivity checks are tagged with the backend epoch, which
//! changes whenever the backend URL does.

use talksy_types::{
    envelope::ApiResponse,
    event::SessionEvent,
    message::ChatMessage,
    status::ConnectionStatus,
};

use crate::ports::AssistantPort;

pub const MOUNT_ERROR: &str = "Welcome to Talksy! I'm your private voice assistant. The backend server appears to be offline, so I'll be operating in limited mode.";
pub const LISTEN_ADVISORY: &str = "Voice recognition requires the backend server to be running. Please start the backend server and try again.";
pub const COULD_NOT_HEAR: &str = "I couldn't hear what you said. Please try again.";

pub fn submit_error_text(backend_url: &str) -> String {
    format!(
        "Sorry, I encountered an error while processing your request. Please ensure the backend server is running at {}.",
        backend_url
    )
}

pub fn listen_error_text(backend_url: &str) -> String {
    format!(
        "Sorry, I encountered an error while trying to listen. Please ensure the backend server is running at {}.",
        backend_url
    )
}

/// What a backend call should do once spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallRequest {
    /// Probe, then fetch the greeting
    Greeting,
    Text(String),
    Listen,
}

/// A call the controller has committed to; run it and feed the event back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall {
    pub generation: u64,
    pub request: CallRequest,
}

impl PendingCall {
    /// Perform the network side of the call. Touches no session state.
    pub async fn run(self, port: &dyn AssistantPort) -> SessionEvent {
        let generation = self.generation;
        match self.request {
            CallRequest::Greeting => {
                let connected = port.check_connection().await;
                let result = port.get_greeting().await;
                SessionEvent::GreetingReceived {
                    generation,
                    connected,
                    result,
                }
            }
            CallRequest::Text(command) => SessionEvent::TextReplyReceived {
                generation,
                result: port.process_text_command(&command).await,
            },
            CallRequest::Listen => SessionEvent::VoiceReplyReceived {
                generation,
                result: port.listen_for_command().await,
            },
        }
    }
}

/// Outcome of pressing the microphone button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenToggle {
    /// Was listening; capture stopped locally
    Stopped,
    /// Backend is down; an advisory message was appended
    Advisory,
    /// Another call is outstanding
    Ignored,
    /// Capture started; run the call
    Started(PendingCall),
}

pub struct SessionController {
    messages: Vec<ChatMessage>,
    status: ConnectionStatus,
    is_loading: bool,
    is_listening: bool,
    generation: u64,
    /// Generation of a capture the user stopped but whose reply is still out
    abandoned: Option<u64>,
    backend_epoch: u64,
    backend_url: String,
}

impl SessionController {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            status: ConnectionStatus::Connecting,
            is_loading: false,
            is_listening: false,
            generation: 0,
            abandoned: None,
            backend_epoch: 0,
            backend_url: backend_url.into(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Bumped by every backend change; tag connectivity checks with it
    pub fn backend_epoch(&self) -> u64 {
        self.backend_epoch
    }

    /// Used after the backend URL is changed in settings. Checks still in
    /// flight against the old URL are dropped when they land.
    pub fn set_backend_url(&mut self, url: impl Into<String>) {
        self.backend_url = url.into();
        self.backend_epoch += 1;
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_listening
    }

    // ─── Control enablement ──────────────────────────────────

    pub fn can_toggle_listen(&self) -> bool {
        !((self.is_loading && !self.is_listening) || self.status == ConnectionStatus::Connecting)
    }

    pub fn input_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_busy()
    }

    // ─── Transitions ─────────────────────────────────────────

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Initial mount: connecting + loading until the greeting lands.
    pub fn begin_mount(&mut self) -> PendingCall {
        self.status = ConnectionStatus::Connecting;
        self.is_loading = true;
        PendingCall {
            generation: self.next_generation(),
            request: CallRequest::Greeting,
        }
    }

    /// Form submission. Blank input or an outstanding call is ignored;
    /// otherwise the user message is shown immediately.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingCall> {
        if text.trim().is_empty() || self.is_loading {
            return None;
        }
        self.push(ChatMessage::user(text));
        self.is_loading = true;
        Some(PendingCall {
            generation: self.next_generation(),
            request: CallRequest::Text(text.to_string()),
        })
    }

    /// Microphone button.
    pub fn toggle_listen(&mut self) -> ListenToggle {
        if self.is_listening {
            // No cancel is sent upstream. Loading stays set until the reply lands.
            self.is_listening = false;
            self.abandoned = Some(self.generation);
            self.next_generation();
            log::info!("Listening stopped by user");
            return ListenToggle::Stopped;
        }
        if self.status == ConnectionStatus::Disconnected {
            self.push(ChatMessage::assistant(LISTEN_ADVISORY));
            return ListenToggle::Advisory;
        }
        if self.is_loading {
            return ListenToggle::Ignored;
        }
        self.is_listening = true;
        self.is_loading = true;
        ListenToggle::Started(PendingCall {
            generation: self.next_generation(),
            request: CallRequest::Listen,
        })
    }

    /// Feed a completion back into the session.
    pub fn apply(&mut self, event: SessionEvent) {
        if let Some(generation) = event.generation() {
            if self.abandoned == Some(generation) {
                log::debug!("Stopped capture settled (generation {})", generation);
                self.abandoned = None;
                self.is_loading = false;
                return;
            }
            if generation != self.generation {
                log::debug!(
                    "Discarding stale completion (generation {}, current {})",
                    generation,
                    self.generation
                );
                return;
            }
        }

        match event {
            SessionEvent::GreetingReceived {
                connected, result, ..
            } => {
                self.status = ConnectionStatus::from_reachable(connected);
                match result {
                    Ok(resp) => {
                        if let Some(text) = resp.message_text() {
                            self.push(ChatMessage::assistant(text));
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to get greeting: {}", e);
                        self.status = ConnectionStatus::Disconnected;
                        self.push(ChatMessage::assistant(MOUNT_ERROR));
                    }
                }
                self.is_loading = false;
            }
            SessionEvent::TextReplyReceived { result, .. } => {
                match result {
                    Ok(resp) => {
                        self.status = status_of(&resp);
                        if let Some(text) = resp.response_text() {
                            self.push(ChatMessage::assistant(text));
                        }
                    }
                    Err(e) => {
                        log::error!("Error processing command: {}", e);
                        self.status = ConnectionStatus::Disconnected;
                        let text = submit_error_text(&self.backend_url);
                        self.push(ChatMessage::assistant(text));
                    }
                }
                self.is_loading = false;
            }
            SessionEvent::VoiceReplyReceived { result, .. } => {
                match result {
                    Ok(resp) => {
                        self.status = status_of(&resp);
                        self.record_voice_reply(&resp);
                    }
                    Err(e) => {
                        log::error!("Error listening for command: {}", e);
                        self.status = ConnectionStatus::Disconnected;
                        let text = listen_error_text(&self.backend_url);
                        self.push(ChatMessage::assistant(text));
                    }
                }
                self.is_listening = false;
                self.is_loading = false;
            }
            SessionEvent::ConnectionChecked { epoch, connected } => {
                if epoch != self.backend_epoch {
                    log::debug!(
                        "Discarding connection check for old backend (epoch {}, current {})",
                        epoch,
                        self.backend_epoch
                    );
                    return;
                }
                self.status = ConnectionStatus::from_reachable(connected);
            }
        }
    }

    fn record_voice_reply(&mut self, resp: &ApiResponse) {
        match resp.command_text() {
            Some(command) if resp.is_success() => {
                self.push(ChatMessage::user(command));
                if let Some(reply) = resp.response_text() {
                    self.push(ChatMessage::assistant(reply));
                }
            }
            // On failure the command field carries the explanation
            other => {
                let text = other.unwrap_or(COULD_NOT_HEAR);
                self.push(ChatMessage::assistant(text));
            }
        }
    }

    // ─── Straight-line helpers ───────────────────────────────

    /// Mount and wait for the greeting.
    pub async fn mount(&mut self, port: &dyn AssistantPort) {
        let call = self.begin_mount();
        let event = call.run(port).await;
        self.apply(event);
    }

    /// Submit and wait for the reply. Returns false if the submission was ignored.
    pub async fn submit(&mut self, text: &str, port: &dyn AssistantPort) -> bool {
        match self.begin_submit(text) {
            Some(call) => {
                let event = call.run(port).await;
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Toggle the microphone; when capture starts, wait for its result.
    pub async fn toggle_listening(&mut self, port: &dyn AssistantPort) -> ListenToggle {
        match self.toggle_listen() {
            ListenToggle::Started(call) => {
                let event = call.clone().run(port).await;
                self.apply(event);
                ListenToggle::Started(call)
            }
            other => other,
        }
    }
}

fn status_of(resp: &ApiResponse) -> ConnectionStatus {
    ConnectionStatus::from_reachable(resp.indicates_connected())
}
