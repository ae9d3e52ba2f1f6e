//! Channel presenter port definition.

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Channel, Item, Message};

/// Port for the collaborator that owns a channel's message list.
///
/// Implementations keep the list in sync with the backend; the presentation
/// code only reads a snapshot of it.
#[cfg_attr(test, automock)]
pub trait ChannelPresenterPort: Send + Sync {
    /// Channel being shown.
    fn channel(&self) -> &Channel;

    /// Parent message when this presenter shows a reply thread.
    fn parent_message(&self) -> Option<Message>;

    /// Whether status separators are rendered.
    fn show_statuses(&self) -> bool;

    /// Ordered list items, oldest first.
    fn items(&self) -> Vec<Item>;
}
