//! chatcell - presentation policy for chat message lists.
//!
//! Decides how each message of an ordered list is shown: body, author
//! grouping, continuation styling, attachments, reactions and reply
//! affordances, plus where taps on attachments and reply counters lead.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing presentation services, use cases and descriptors.
pub mod application;
/// Domain layer containing entities and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and snapshot adapters.
pub mod infrastructure;
/// Presentation layer rendering descriptors and handling navigation.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "chatcell";
