pub mod chat;
pub mod footer;
pub mod header;
pub mod settings;
pub mod voice_indicator;
