//! Response envelope shared by every backend endpoint.
//!
//! Every field is optional. A missing field, or an empty string, means
//! "nothing to display" and is never an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ApiResponse {
    /// An envelope tagged `success: false` with no content yet
    pub fn failure() -> Self {
        Self {
            success: Some(false),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Only an explicit `success: false` counts as a failure; a 200 without
    /// the field is still treated as connected.
    pub fn indicates_connected(&self) -> bool {
        self.success != Some(false)
    }

    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    pub fn message_text(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    pub fn response_text(&self) -> Option<&str> {
        non_empty(&self.response)
    }

    pub fn command_text(&self) -> Option<&str> {
        non_empty(&self.command)
    }

    pub fn speech_text(&self) -> Option<&str> {
        non_empty(&self.text)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
