pub mod message;
pub mod status;
pub mod envelope;
pub mod event;
pub mod config;
pub mod error;


pub use error::TalksyError;
pub type Result<T> = std::result::Result<T, TalksyError>;
