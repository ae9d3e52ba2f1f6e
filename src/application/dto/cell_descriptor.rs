//! Cell descriptors produced by the presentation policy.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{AttachmentAction, AttachmentKind, MessageId, ReactionKind};

/// Which side of the list a cell is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent by someone else.
    Incoming,
    /// Sent by the current user.
    Outgoing,
}

/// Vertical spacing below a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Last cell of a same-author run.
    #[default]
    Regular,
    /// Followed by another message from the same author.
    Small,
}

/// Cell body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Body {
    Deleted {
        info_text: String,
        timestamp: Option<DateTime<Utc>>,
    },
    Ephemeral {
        args_text: String,
    },
    Normal {
        text: String,
        mentioned_user_names: Vec<String>,
    },
}

/// Author name, timestamp and avatar shown above a run of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellHeader {
    pub name: String,
    pub date: DateTime<Utc>,
    pub avatar_url: Option<String>,
}

/// How a tapped attachment is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentClass {
    /// Opened in the media gallery.
    ImageOrVideo,
    /// Opened in a web view.
    Other,
}

/// Logo drawn over a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Logo {
    Giphy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentDescriptor {
    pub index: usize,
    pub kind: AttachmentKind,
    pub class: AttachmentClass,
    pub title: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub logo: Option<Logo>,
    /// Buttons of an ephemeral message; empty otherwise.
    pub actions: Vec<AttachmentAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionBadge {
    pub kind: ReactionKind,
    pub emoji: String,
    pub count: u32,
    /// The current user reacted with this kind.
    pub own: bool,
}

/// Fully resolved presentation of one message cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDescriptor {
    pub message_id: MessageId,
    pub direction: Direction,
    pub body: Body,
    pub show_reply_affordance: bool,
    pub reply_count: u32,
    /// `None` when the next item continues this author's run.
    pub header: Option<CellHeader>,
    pub padding: Padding,
    pub is_continuation: bool,
    /// Bubble background joins the previous bubble.
    pub background_continued: bool,
    pub attachments: Vec<AttachmentDescriptor>,
    /// `None` when reactions are hidden.
    pub reactions: Option<Vec<ReactionBadge>>,
}

impl CellDescriptor {
    #[must_use]
    pub const fn show_avatar_and_header(&self) -> bool {
        self.header.is_some()
    }

    #[must_use]
    pub const fn show_reactions(&self) -> bool {
        self.reactions.is_some()
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.body, Body::Deleted { .. })
    }
}

/// Presentation of a user activity notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDescriptor {
    pub direction: Direction,
    pub info_text: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Presentation of any list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum ItemDescriptor {
    Loading,
    Status {
        title: String,
        subtitle: Option<String>,
        highlighted: bool,
    },
    Message(CellDescriptor),
    Activity(ActivityDescriptor),
}

impl ItemDescriptor {
    #[must_use]
    pub const fn as_cell(&self) -> Option<&CellDescriptor> {
        match self {
            Self::Message(cell) => Some(cell),
            _ => None,
        }
    }
}
