//! Message cell presentation policy.
//!
//! Maps a message and its position in the ordered item list to a
//! [`CellDescriptor`]. Grouping only looks at the immediate neighbours, so
//! the result never depends on what was rendered before.

use chrono::{DateTime, Utc};
use tracing::trace;

use super::EmojiClassifier;
use crate::application::dto::{
    ActivityDescriptor, AttachmentClass, AttachmentDescriptor, Body, CellDescriptor, CellHeader,
    Direction, ItemDescriptor, Logo, Padding, ReactionBadge,
};
use crate::domain::entities::{ChannelConfig, Item, Message, User};

/// Info text shown in place of a deleted message.
pub const DELETED_MESSAGE_TEXT: &str = "This message was deleted.";

/// Channel-level inputs shared by every cell of a list.
#[derive(Debug, Clone)]
pub struct PresentationContext {
    config: ChannelConfig,
    in_thread: bool,
    deleted_text: String,
}

impl PresentationContext {
    /// Creates a context for a channel or, when `in_thread`, a reply thread.
    #[must_use]
    pub fn new(config: ChannelConfig, in_thread: bool) -> Self {
        Self {
            config,
            in_thread,
            deleted_text: DELETED_MESSAGE_TEXT.to_string(),
        }
    }

    /// Overrides the deleted message info text.
    #[must_use]
    pub fn with_deleted_text(mut self, text: impl Into<String>) -> Self {
        self.deleted_text = text.into();
        self
    }

    #[must_use]
    pub const fn config(&self) -> ChannelConfig {
        self.config
    }

    #[must_use]
    pub const fn in_thread(&self) -> bool {
        self.in_thread
    }
}

/// Builds cell descriptors for a message list.
pub struct MessagePresentationService {
    context: PresentationContext,
}

impl MessagePresentationService {
    #[must_use]
    pub const fn new(context: PresentationContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        &self.context
    }

    /// Describes the item at `index`. `now` stamps user activity notices.
    ///
    /// Returns `None` when `index` is out of bounds.
    #[must_use]
    pub fn describe_item(
        &self,
        index: usize,
        items: &[Item],
        now: DateTime<Utc>,
    ) -> Option<ItemDescriptor> {
        let descriptor = match items.get(index)? {
            Item::Loading => ItemDescriptor::Loading,
            Item::Status {
                title,
                subtitle,
                highlighted,
            } => ItemDescriptor::Status {
                title: title.clone(),
                subtitle: subtitle.clone(),
                highlighted: *highlighted,
            },
            Item::Message(message) => {
                ItemDescriptor::Message(self.describe_message(message, index, items))
            }
            Item::UserActivity { user, text } => {
                ItemDescriptor::Activity(Self::describe_activity(user, text, now))
            }
        };

        Some(descriptor)
    }

    /// Describes `message`, located at `index` in `items`.
    #[must_use]
    pub fn describe_message(&self, message: &Message, index: usize, items: &[Item]) -> CellDescriptor {
        let config = self.context.config;
        let direction = direction_of(message.user());

        let body = if message.is_deleted() {
            Body::Deleted {
                info_text: self.context.deleted_text.clone(),
                timestamp: message.deleted(),
            }
        } else if message.is_ephemeral() {
            Body::Ephemeral {
                args_text: message.args().unwrap_or_default().to_string(),
            }
        } else {
            Body::Normal {
                text: message.text_or_args().to_string(),
                mentioned_user_names: message
                    .mentioned_users()
                    .iter()
                    .map(|user| user.name().to_string())
                    .collect(),
            }
        };

        let show_reply_affordance = matches!(body, Body::Normal { .. })
            && !self.context.in_thread
            && config.replies_enabled
            && message.reply_count() > 0;

        let next_is_same_author = next_message(index, items)
            .is_some_and(|next| next.user().is_same_author(message.user()));

        let header = (!next_is_same_author).then(|| CellHeader {
            name: message.user().name().to_string(),
            date: message.created(),
            avatar_url: message.user().avatar_url().map(String::from),
        });
        let padding = if next_is_same_author {
            Padding::Small
        } else {
            Padding::Regular
        };

        let is_continuation = previous_message(index, items).is_some_and(|previous| {
            previous.user().is_same_author(message.user())
                && !EmojiClassifier::is_emoji_only(previous.text())
        });

        let mut descriptor = CellDescriptor {
            message_id: message.id().clone(),
            direction,
            body,
            show_reply_affordance,
            reply_count: if show_reply_affordance {
                message.reply_count()
            } else {
                0
            },
            header,
            padding,
            is_continuation,
            background_continued: is_continuation,
            attachments: Vec::new(),
            reactions: None,
        };

        if message.is_deleted() {
            trace!(message_id = %message.id(), "Deleted message, skipping attachments and reactions");
            return descriptor;
        }

        if message.has_attachments() {
            descriptor.attachments = describe_attachments(message);
            descriptor.background_continued = !message.is_ephemeral();
        }

        if !message.is_ephemeral() && config.reactions_enabled {
            descriptor.reactions = Some(reaction_badges(message));
        }

        descriptor
    }

    /// Describes a user activity notice stamped at `now`.
    #[must_use]
    pub fn describe_activity(user: &User, text: &str, now: DateTime<Utc>) -> ActivityDescriptor {
        ActivityDescriptor {
            direction: Direction::Incoming,
            info_text: text.to_string(),
            date: now,
            name: user.name().to_string(),
            avatar_url: user.avatar_url().map(String::from),
        }
    }
}

fn direction_of(user: &User) -> Direction {
    if user.is_current() {
        Direction::Outgoing
    } else {
        Direction::Incoming
    }
}

fn next_message(index: usize, items: &[Item]) -> Option<&Message> {
    items.get(index.checked_add(1)?)?.as_message()
}

fn previous_message(index: usize, items: &[Item]) -> Option<&Message> {
    items.get(index.checked_sub(1)?)?.as_message()
}

fn describe_attachments(message: &Message) -> Vec<AttachmentDescriptor> {
    message
        .attachments()
        .iter()
        .enumerate()
        .map(|(index, attachment)| AttachmentDescriptor {
            index,
            kind: attachment.kind(),
            class: if attachment.is_image_or_video() {
                AttachmentClass::ImageOrVideo
            } else {
                AttachmentClass::Other
            },
            title: attachment.title().to_string(),
            url: attachment.url().map(String::from),
            image_url: attachment.image_url().map(String::from),
            logo: attachment.is_giphy().then_some(Logo::Giphy),
            actions: if message.is_ephemeral() {
                attachment.actions().to_vec()
            } else {
                Vec::new()
            },
        })
        .collect()
}

fn reaction_badges(message: &Message) -> Vec<ReactionBadge> {
    let mut badges: Vec<ReactionBadge> = message
        .reaction_counts()
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(kind, count)| ReactionBadge {
            kind: kind.clone(),
            emoji: kind.emoji().to_string(),
            count: *count,
            own: message.has_own_reaction(kind),
        })
        .collect();

    // Stable sort: ties keep kind order.
    badges.sort_by(|a, b| b.count.cmp(&a.count));
    badges
}
