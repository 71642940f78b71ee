//! UI-local state and the intents panels hand back to the app.
//! Conversation state itself lives in the session controller.

use talksy_types::config::BackendConfig;
use talksy_types::status::ConnectionStatus;

/// State visible to UI panels that is not part of the conversation
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Backend settings being edited, applied on Save
    pub settings_draft: BackendConfig,
    /// Result of the last Save
    pub save_feedback: Option<SaveFeedback>,
    /// Ask the input field to grab focus on the next frame
    pub focus_input: bool,
}

/// Something the user asked for from the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    Submit(String),
    ToggleListen,
    /// Read an assistant message aloud
    Speak(String),
}

/// Save feedback shown under the settings form
#[derive(Debug, Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

impl UiState {
    pub fn new(backend: BackendConfig) -> Self {
        Self {
            input_text: String::new(),
            show_settings: false,
            settings_draft: backend,
            save_feedback: None,
            focus_input: true,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(BackendConfig::default())
    }
}

/// Banner copy, shown whenever the backend is not known to be up
pub fn banner_text(status: ConnectionStatus) -> Option<&'static str> {
    match status {
        ConnectionStatus::Connected => None,
        ConnectionStatus::Connecting => Some("Connecting to backend server..."),
        ConnectionStatus::Disconnected => {
            Some("Backend server not connected. Voice recognition will be unavailable.")
        }
    }
}

pub fn input_placeholder(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "Limited functionality without backend...",
        _ => "Type a message...",
    }
}
