//! Domain entity definitions.

mod attachment;
mod channel;
mod item;
mod message;
mod user;

pub use attachment::{ActionStyle, Attachment, AttachmentAction, AttachmentKind};
pub use channel::{Channel, ChannelConfig, ChannelId};
pub use item::Item;
pub use message::{Message, MessageId, MessageKind, ReactionKind};
pub use user::{User, UserId};
