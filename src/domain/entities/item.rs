use serde::{Deserialize, Serialize};

use super::{Message, User};

/// Entry of the rendered message list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum Item {
    /// Older history is being fetched.
    Loading,
    /// Separator such as a date or "new messages" marker.
    Status {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        highlighted: bool,
    },
    Message(Message),
    /// Notice about a user, e.g. "joined the channel".
    UserActivity { user: User, text: String },
}

impl Item {
    /// Returns the wrapped message, if any.
    #[must_use]
    pub const fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<Message> for Item {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}
