//! Maps gestures on a message cell to cell actions.

use super::AttachmentRouter;
use crate::application::dto::{CellAction, CellDescriptor, Gesture, Gestures};
use crate::domain::entities::{ChannelConfig, Message};

pub struct GesturePolicy;

impl GesturePolicy {
    /// Gestures the message bubble listens to.
    ///
    /// Deleted and ephemeral messages accept none. Tap is only wired when
    /// reactions are enabled since it opens the reaction picker.
    #[must_use]
    pub fn accepted(message: &Message, config: ChannelConfig) -> Gestures {
        if message.is_deleted() || message.is_ephemeral() {
            return Gestures::empty();
        }

        if config.reactions_enabled {
            Gestures::TAP | Gestures::LONG_PRESS
        } else {
            Gestures::LONG_PRESS
        }
    }

    /// Resolves a gesture on the message bubble.
    #[must_use]
    pub fn on_gesture(
        message: &Message,
        config: ChannelConfig,
        gesture: Gesture,
    ) -> Option<CellAction> {
        if !Self::accepted(message, config).contains(gesture.into()) {
            return None;
        }

        let message_id = message.id().clone();
        Some(match gesture {
            Gesture::Tap => CellAction::ShowReactions { message_id },
            Gesture::LongPress => CellAction::ShowMenu { message_id },
        })
    }

    /// Resolves a tap on the reply counter of a rendered cell.
    #[must_use]
    pub fn on_reply_counter(cell: &CellDescriptor) -> Option<CellAction> {
        cell.show_reply_affordance.then(|| CellAction::ShowReplies {
            message_id: cell.message_id.clone(),
        })
    }

    /// Resolves a tap on attachment `index`.
    #[must_use]
    pub fn on_attachment(message: &Message, index: usize) -> Option<CellAction> {
        if message.is_deleted() {
            return None;
        }

        AttachmentRouter::route(message.attachments(), index).map(CellAction::OpenAttachment)
    }

    /// Resolves a tap on action button `action` of attachment `attachment`.
    ///
    /// Only ephemeral messages carry live action buttons.
    #[must_use]
    pub fn on_action_button(
        message: &Message,
        attachment: usize,
        action: usize,
    ) -> Option<CellAction> {
        if !message.is_ephemeral() || message.is_deleted() {
            return None;
        }

        let action = message.attachments().get(attachment)?.actions().get(action)?;
        Some(CellAction::SendEphemeralAction {
            message_id: message.id().clone(),
            action: action.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MessagePresentationService, PresentationContext};
    use crate::domain::entities::{
        Attachment, AttachmentAction, AttachmentKind, Item, MessageKind, User,
    };
    use chrono::Utc;

    fn message() -> Message {
        Message::new("m1", User::new("u1", "Alice"), "hello", Utc::now())
    }

    fn no_reactions() -> ChannelConfig {
        ChannelConfig {
            replies_enabled: true,
            reactions_enabled: false,
        }
    }

    #[test]
    fn test_accepted_gestures() {
        assert_eq!(
            GesturePolicy::accepted(&message(), ChannelConfig::default()),
            Gestures::TAP | Gestures::LONG_PRESS
        );
        assert_eq!(
            GesturePolicy::accepted(&message(), no_reactions()),
            Gestures::LONG_PRESS
        );
        assert!(
            GesturePolicy::accepted(
                &message().with_kind(MessageKind::Ephemeral),
                ChannelConfig::default()
            )
            .is_empty()
        );
        assert!(
            GesturePolicy::accepted(&message().with_deleted(Utc::now()), ChannelConfig::default())
                .is_empty()
        );
    }

    #[test]
    fn test_on_gesture() {
        let id = message().id().clone();

        assert_eq!(
            GesturePolicy::on_gesture(&message(), ChannelConfig::default(), Gesture::Tap),
            Some(CellAction::ShowReactions {
                message_id: id.clone()
            })
        );
        assert_eq!(
            GesturePolicy::on_gesture(&message(), no_reactions(), Gesture::LongPress),
            Some(CellAction::ShowMenu { message_id: id })
        );
        assert_eq!(
            GesturePolicy::on_gesture(&message(), no_reactions(), Gesture::Tap),
            None
        );
    }

    #[test]
    fn test_on_reply_counter_follows_affordance() {
        let items = vec![Item::from(message().with_reply_count(2))];
        let channel =
            MessagePresentationService::new(PresentationContext::new(ChannelConfig::default(), false));
        let thread =
            MessagePresentationService::new(PresentationContext::new(ChannelConfig::default(), true));
        let parent = items[0].as_message().unwrap();

        assert_eq!(
            GesturePolicy::on_reply_counter(&channel.describe_message(parent, 0, &items)),
            Some(CellAction::ShowReplies {
                message_id: parent.id().clone()
            })
        );
        assert_eq!(
            GesturePolicy::on_reply_counter(&thread.describe_message(parent, 0, &items)),
            None
        );
    }

    #[test]
    fn test_on_action_button_only_for_ephemeral() {
        let shuffle = AttachmentAction::new("image_action", "shuffle", "Shuffle");
        let attachments = vec![
            Attachment::new(AttachmentKind::Giphy, "cats").with_actions(vec![shuffle.clone()]),
        ];
        let ephemeral = message()
            .with_kind(MessageKind::Ephemeral)
            .with_attachments(attachments.clone());
        let regular = message().with_attachments(attachments);

        assert_eq!(
            GesturePolicy::on_action_button(&ephemeral, 0, 0),
            Some(CellAction::SendEphemeralAction {
                message_id: ephemeral.id().clone(),
                action: shuffle,
            })
        );
        assert_eq!(GesturePolicy::on_action_button(&ephemeral, 0, 1), None);
        assert_eq!(GesturePolicy::on_action_button(&regular, 0, 0), None);
    }

    #[test]
    fn test_on_attachment_ignores_deleted() {
        let link = Attachment::new(AttachmentKind::Link, "docs").with_url("https://docs.rs");
        let live = message().with_attachments(vec![link.clone()]);
        let deleted = message()
            .with_attachments(vec![link])
            .with_deleted(Utc::now());

        assert!(matches!(
            GesturePolicy::on_attachment(&live, 0),
            Some(CellAction::OpenAttachment(_))
        ));
        assert_eq!(GesturePolicy::on_attachment(&deleted, 0), None);
    }
}
