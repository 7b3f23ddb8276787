//! Chat command webhook server.
//!
//! Answers chat-platform slash commands posted as `POST /<command>.<format>`:
//! - parses the free-text `text` field into positional arguments
//! - looks the request up in a third-party data API
//! - renders the result as indented JSON or as chat markup

pub mod api;
pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod responses;

pub use config::Config;
pub use error::ServerError;
pub use format::ResponseFormat;
