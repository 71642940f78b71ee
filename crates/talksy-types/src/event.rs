use crate::envelope::ApiResponse;
use crate::Result;

/// Completion events produced by in-flight backend calls.
/// The UI drains these each frame and hands them to the session controller.
///
/// `generation` identifies the call that produced the event; the controller
/// drops events whose generation is no longer current.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Initial probe + greeting finished
    GreetingReceived {
        generation: u64,
        connected: bool,
        result: Result<ApiResponse>,
    },

    /// A typed command was answered
    TextReplyReceived {
        generation: u64,
        result: Result<ApiResponse>,
    },

    /// A voice capture round trip finished
    VoiceReplyReceived {
        generation: u64,
        result: Result<ApiResponse>,
    },

    /// A manual connectivity check finished. `epoch` is the session's
    /// backend epoch when the check was started.
    ConnectionChecked { epoch: u64, connected: bool },
}

impl SessionEvent {
    pub fn generation(&self) -> Option<u64> {
        match self {
            SessionEvent::GreetingReceived { generation, .. }
            | SessionEvent::TextReplyReceived { generation, .. }
            | SessionEvent::VoiceReplyReceived { generation, .. } => Some(*generation),
            SessionEvent::ConnectionChecked { .. } => None,
        }
    }
}
