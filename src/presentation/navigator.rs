//! Screen stack driven by cell actions.

use serde::Serialize;
use tracing::debug;

use crate::application::dto::{AttachmentRoute, CellAction, MediaGalleryItem};
use crate::domain::entities::{AttachmentAction, ChannelId, MessageId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Channel {
        channel_id: ChannelId,
    },
    Thread {
        channel_id: ChannelId,
        parent_id: MessageId,
    },
    MediaGallery {
        items: Vec<MediaGalleryItem>,
        selected_index: usize,
    },
    WebView {
        url: String,
        title: String,
    },
    ReactionPicker {
        message_id: MessageId,
    },
    MessageMenu {
        message_id: MessageId,
    },
}

/// Result of applying a cell action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum Transition {
    /// A new screen is now on top.
    Pushed(Screen),
    /// The action leaves the UI; the backend must send it.
    Outbound {
        message_id: MessageId,
        action: AttachmentAction,
    },
}

/// Navigation stack rooted at a channel screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    channel_id: ChannelId,
    stack: Vec<Screen>,
}

impl Navigator {
    #[must_use]
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            stack: vec![Screen::Channel {
                channel_id: channel_id.clone(),
            }],
            channel_id,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Screen {
        // The root screen is never popped.
        &self.stack[self.stack.len() - 1]
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn screens(&self) -> &[Screen] {
        &self.stack
    }

    pub fn apply(&mut self, action: CellAction) -> Transition {
        let screen = match action {
            CellAction::ShowReplies { message_id } => Screen::Thread {
                channel_id: self.channel_id.clone(),
                parent_id: message_id,
            },
            CellAction::ShowReactions { message_id } => Screen::ReactionPicker { message_id },
            CellAction::ShowMenu { message_id } => Screen::MessageMenu { message_id },
            CellAction::OpenAttachment(AttachmentRoute::MediaGallery {
                items,
                selected_index,
            }) => Screen::MediaGallery {
                items,
                selected_index,
            },
            CellAction::OpenAttachment(AttachmentRoute::WebView { url, title }) => {
                Screen::WebView { url, title }
            }
            CellAction::SendEphemeralAction { message_id, action } => {
                debug!(message_id = %message_id, action = %action.value, "Dispatching ephemeral action");
                return Transition::Outbound { message_id, action };
            }
        };

        debug!(depth = self.stack.len() + 1, screen = ?screen, "Pushing screen");
        self.stack.push(screen.clone());
        Transition::Pushed(screen)
    }

    /// Pops the top screen. The root channel screen stays.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        let screen = self.stack.pop();
        debug!(depth = self.stack.len(), "Popped screen");
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replies_pushes_thread() {
        let mut navigator = Navigator::new("general".into());
        let transition = navigator.apply(CellAction::ShowReplies {
            message_id: "m1".into(),
        });

        let expected = Screen::Thread {
            channel_id: "general".into(),
            parent_id: "m1".into(),
        };
        assert_eq!(transition, Transition::Pushed(expected.clone()));
        assert_eq!(navigator.current(), &expected);
        assert_eq!(navigator.depth(), 2);
    }

    #[test]
    fn test_pop_keeps_root() {
        let mut navigator = Navigator::new("general".into());
        navigator.apply(CellAction::OpenAttachment(AttachmentRoute::WebView {
            url: "https://example.com".into(),
            title: "Example".into(),
        }));

        assert!(matches!(navigator.pop(), Some(Screen::WebView { .. })));
        assert_eq!(navigator.pop(), None);
        assert_eq!(
            navigator.current(),
            &Screen::Channel {
                channel_id: "general".into()
            }
        );
    }

    #[test]
    fn test_ephemeral_action_is_outbound() {
        let mut navigator = Navigator::new("general".into());
        let action = AttachmentAction::new("image_action", "send", "Send");
        let transition = navigator.apply(CellAction::SendEphemeralAction {
            message_id: "m1".into(),
            action: action.clone(),
        });

        assert_eq!(
            transition,
            Transition::Outbound {
                message_id: "m1".into(),
                action,
            }
        );
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn test_gallery_and_menus() {
        let mut navigator = Navigator::new("general".into());
        navigator.apply(CellAction::ShowMenu {
            message_id: "m1".into(),
        });
        navigator.apply(CellAction::ShowReactions {
            message_id: "m2".into(),
        });
        navigator.apply(CellAction::OpenAttachment(AttachmentRoute::MediaGallery {
            items: Vec::new(),
            selected_index: 0,
        }));

        assert_eq!(navigator.depth(), 4);
        assert!(matches!(
            navigator.screens()[1],
            Screen::MessageMenu { .. }
        ));
        assert!(matches!(
            navigator.current(),
            Screen::MediaGallery { .. }
        ));
    }
}
