//! Static copy substituted when the backend cannot be used.
//!
//! Two tiers per operation: `unreachable_*` when the probe fails before the
//! call, `failed_*` when the call itself errors. The strings are part of the
//! user-visible contract and must not drift.

use talksy_types::envelope::ApiResponse;

pub const GREETING: &str = "Welcome to Talksy! I'm your offline voice assistant. The backend server is not connected, so I'm working in limited mode.";
pub const UNKNOWN: &str = "I'm sorry, I can't process that right now. The backend server might be offline.";

pub const LISTEN_UNREACHABLE: &str = "Voice recognition requires the backend server to be running.";
pub const SPEAK_UNREACHABLE: &str = "Text-to-speech requires the backend server to be running.";

pub const PROCESS_FAILED: &str = "Failed to process your command. Is the backend server running?";
pub const LISTEN_FAILED: &str = "Failed to listen for command. Is the backend server running?";
pub const SPEAK_FAILED: &str = "Failed to speak. Is the backend server running?";

pub fn unreachable_greeting() -> ApiResponse {
    ApiResponse::failure().with_message(GREETING)
}

/// Greeting errors reuse the offline welcome
pub fn failed_greeting() -> ApiResponse {
    ApiResponse::failure().with_message(GREETING)
}

pub fn unreachable_text_command(command: &str) -> ApiResponse {
    ApiResponse::failure().with_response(format!("{} I received: \"{}\"", UNKNOWN, command))
}

pub fn failed_text_command() -> ApiResponse {
    ApiResponse::failure().with_response(PROCESS_FAILED)
}

pub fn unreachable_listen() -> ApiResponse {
    ApiResponse::failure().with_command(LISTEN_UNREACHABLE)
}

pub fn failed_listen() -> ApiResponse {
    ApiResponse::failure().with_command(LISTEN_FAILED)
}

pub fn unreachable_speak() -> ApiResponse {
    ApiResponse::failure().with_text(SPEAK_UNREACHABLE)
}

pub fn failed_speak() -> ApiResponse {
    ApiResponse::failure().with_text(SPEAK_FAILED)
}
