//! Reply thread opening use case.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::{Channel, Message};
use crate::domain::ports::ChannelPresenterPort;

/// Presenter parameters of a reply thread screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadContext {
    pub channel: Channel,
    pub parent_message: Message,
    pub show_statuses: bool,
}

/// Builds the context of a reply thread bound to a parent message.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenRepliesUseCase;

impl OpenRepliesUseCase {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes with the presenter of the screen the tap came from.
    ///
    /// Returns `None` when there is no presenter to inherit from.
    #[must_use]
    pub fn execute(
        &self,
        presenter: Option<&dyn ChannelPresenterPort>,
        parent_message: &Message,
    ) -> Option<ThreadContext> {
        let Some(presenter) = presenter else {
            debug!(parent = %parent_message.id(), "No channel presenter, replies not opened");
            return None;
        };

        info!(
            channel = %presenter.channel().id(),
            parent = %parent_message.id(),
            replies = parent_message.reply_count(),
            "Opening reply thread"
        );

        Some(ThreadContext {
            channel: presenter.channel().clone(),
            parent_message: parent_message.clone(),
            show_statuses: presenter.show_statuses(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChannelConfig, User};
    use crate::domain::ports::MockChannelPresenterPort;
    use chrono::Utc;

    #[test]
    fn test_inherits_channel_and_statuses() {
        let channel = Channel::new("general", "General", ChannelConfig::default());
        let mut mock = MockChannelPresenterPort::new();
        mock.expect_channel().return_const(channel.clone());
        mock.expect_show_statuses().return_const(false);

        let parent = Message::new("p1", User::new("u1", "Alice"), "root", Utc::now())
            .with_reply_count(2);
        let context = OpenRepliesUseCase::new()
            .execute(Some(&mock), &parent)
            .unwrap();

        assert_eq!(context.channel, channel);
        assert_eq!(context.parent_message, parent);
        assert!(!context.show_statuses);
    }

    #[test]
    fn test_no_presenter() {
        let parent = Message::new("p1", User::new("u1", "Alice"), "root", Utc::now());
        assert!(OpenRepliesUseCase::new().execute(None, &parent).is_none());
    }
}
