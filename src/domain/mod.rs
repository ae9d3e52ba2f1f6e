//! Domain layer with core chat entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Port definitions.
pub mod ports;

pub use entities::{Channel, ChannelConfig, Item, Message, User};
pub use ports::ChannelPresenterPort;
