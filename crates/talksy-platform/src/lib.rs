//! Browser adapters for the Talksy core ports.

pub mod http;

pub use http::FetchTransport;
