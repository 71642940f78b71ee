//! Talksy core: everything between the UI and the wire.
//!
//! Platform adapters implement [`ports::HttpPort`]; the UI drives the
//! [`session::SessionController`] and drains [`event_bus::EventBus`].

pub mod ports;
pub mod prober;
pub mod fallback;
pub mod gateway;
pub mod session;
pub mod event_bus;
