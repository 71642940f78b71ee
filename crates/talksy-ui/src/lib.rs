//! Presentation layer. Panels render from the session controller and
//! return user intents; nothing here talks to the network.

pub mod panels;
pub mod state;
pub mod theme;
