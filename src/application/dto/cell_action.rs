//! Navigation outcomes of user interaction with a cell.

use serde::Serialize;

use super::cell_descriptor::Logo;
use crate::domain::entities::{AttachmentAction, MessageId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaGalleryItem {
    pub title: String,
    pub url: Option<String>,
    pub logo: Option<Logo>,
}

/// Where a tapped attachment is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum AttachmentRoute {
    MediaGallery {
        items: Vec<MediaGalleryItem>,
        selected_index: usize,
    },
    WebView {
        url: String,
        title: String,
    },
}

/// Raw gesture delivered by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    LongPress,
}

bitflags::bitflags! {
    /// Gestures a message bubble listens to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    pub struct Gestures: u8 {
        const TAP = 1 << 0;
        const LONG_PRESS = 1 << 1;
    }
}

impl From<Gesture> for Gestures {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Tap => Self::TAP,
            Gesture::LongPress => Self::LONG_PRESS,
        }
    }
}

/// Side effect requested from the screen hosting the cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellAction {
    ShowReactions { message_id: MessageId },
    ShowMenu { message_id: MessageId },
    ShowReplies { message_id: MessageId },
    OpenAttachment(AttachmentRoute),
    SendEphemeralAction {
        message_id: MessageId,
        action: AttachmentAction,
    },
}
