use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Attachment, User};

/// Unique identifier for a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Chat message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Regular,
    Ephemeral,
    Error,
    Reply,
    System,
    Deleted,
}

impl MessageKind {
    /// Returns true for transient messages only visible to the current user.
    #[must_use]
    pub const fn is_ephemeral(self) -> bool {
        matches!(self, Self::Ephemeral | Self::Error)
    }
}

/// Reaction type, e.g. `like` or `love`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionKind(String);

impl ReactionKind {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Emoji shown for this reaction; unknown kinds show their raw name.
    #[must_use]
    pub fn emoji(&self) -> &str {
        match self.0.as_str() {
            "like" => "👍",
            "love" => "❤️",
            "haha" => "😂",
            "wow" => "😲",
            "sad" => "😔",
            "angry" => "😠",
            other => other,
        }
    }
}

impl From<&str> for ReactionKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Chat message entity.
///
/// Messages are replaced wholesale on update; there are no setters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    user: User,
    #[serde(default)]
    text: String,
    #[serde(default)]
    args: Option<String>,
    #[serde(default, rename = "type")]
    kind: MessageKind,
    #[serde(default)]
    attachments: Vec<Attachment>,
    #[serde(default)]
    mentioned_users: Vec<User>,
    #[serde(default)]
    reply_count: u32,
    #[serde(default)]
    parent_id: Option<MessageId>,
    created: DateTime<Utc>,
    #[serde(default)]
    deleted: Option<DateTime<Utc>>,
    #[serde(default)]
    reaction_counts: BTreeMap<ReactionKind, u32>,
    #[serde(default)]
    own_reactions: Vec<ReactionKind>,
}

impl Message {
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        user: User,
        text: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user,
            text: text.into(),
            args: None,
            kind: MessageKind::Regular,
            attachments: Vec::new(),
            mentioned_users: Vec::new(),
            reply_count: 0,
            parent_id: None,
            created,
            deleted: None,
            reaction_counts: BTreeMap::new(),
            own_reactions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.args = Some(args.into());
        self
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    #[must_use]
    pub fn with_mentioned_users(mut self, users: Vec<User>) -> Self {
        self.mentioned_users = users;
        self
    }

    #[must_use]
    pub const fn with_reply_count(mut self, count: u32) -> Self {
        self.reply_count = count;
        self
    }

    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<MessageId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    #[must_use]
    pub const fn with_deleted(mut self, deleted: DateTime<Utc>) -> Self {
        self.deleted = Some(deleted);
        self
    }

    #[must_use]
    pub fn with_reaction(mut self, kind: impl Into<ReactionKind>, count: u32) -> Self {
        self.reaction_counts.insert(kind.into(), count);
        self
    }

    #[must_use]
    pub fn with_own_reaction(mut self, kind: impl Into<ReactionKind>) -> Self {
        self.own_reactions.push(kind.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub fn mentioned_users(&self) -> &[User] {
        &self.mentioned_users
    }

    #[must_use]
    pub const fn reply_count(&self) -> u32 {
        self.reply_count
    }

    #[must_use]
    pub const fn parent_id(&self) -> Option<&MessageId> {
        self.parent_id.as_ref()
    }

    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    #[must_use]
    pub const fn deleted(&self) -> Option<DateTime<Utc>> {
        self.deleted
    }

    #[must_use]
    pub const fn reaction_counts(&self) -> &BTreeMap<ReactionKind, u32> {
        &self.reaction_counts
    }

    #[must_use]
    pub fn own_reactions(&self) -> &[ReactionKind] {
        &self.own_reactions
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some() || self.kind == MessageKind::Deleted
    }

    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        self.kind.is_ephemeral()
    }

    #[must_use]
    pub const fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Text to display: the text itself, or the args when the text is empty.
    #[must_use]
    pub fn text_or_args(&self) -> &str {
        if self.text.is_empty() {
            self.args.as_deref().unwrap_or_default()
        } else {
            &self.text
        }
    }

    #[must_use]
    pub fn has_own_reaction(&self, kind: &ReactionKind) -> bool {
        self.own_reactions.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author() -> User {
        User::new("u1", "Alice")
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_message_creation() {
        let message = Message::new("m1", author(), "Hello, world!", at(0));

        assert_eq!(message.id().as_str(), "m1");
        assert_eq!(message.text(), "Hello, world!");
        assert_eq!(message.user().name(), "Alice");
        assert_eq!(message.kind(), MessageKind::Regular);
        assert!(!message.is_deleted());
        assert!(!message.is_ephemeral());
    }

    #[test]
    fn test_text_or_args_falls_back_when_empty() {
        let with_text = Message::new("m1", author(), "hi", at(0)).with_args("/giphy cats");
        let without_text = Message::new("m2", author(), "", at(0)).with_args("/giphy cats");
        let neither = Message::new("m3", author(), "", at(0));

        assert_eq!(with_text.text_or_args(), "hi");
        assert_eq!(without_text.text_or_args(), "/giphy cats");
        assert_eq!(neither.text_or_args(), "");
    }

    #[test]
    fn test_deleted_by_timestamp_or_kind() {
        let by_timestamp = Message::new("m1", author(), "x", at(0)).with_deleted(at(1));
        let by_kind = Message::new("m2", author(), "x", at(0)).with_kind(MessageKind::Deleted);

        assert!(by_timestamp.is_deleted());
        assert!(by_kind.is_deleted());
    }

    #[test]
    fn test_error_kind_is_ephemeral() {
        assert!(MessageKind::Ephemeral.is_ephemeral());
        assert!(MessageKind::Error.is_ephemeral());
        assert!(!MessageKind::Reply.is_ephemeral());
    }

    #[test]
    fn test_reaction_emoji() {
        assert_eq!(ReactionKind::from("like").emoji(), "👍");
        assert_eq!(ReactionKind::from("party").emoji(), "party");
    }

    #[test]
    fn test_message_deserialize() {
        let json = r#"{
            "id": "m7",
            "user": {"id": "u1", "name": "Alice"},
            "text": "hello",
            "type": "ephemeral",
            "args": "/giphy dogs",
            "created": "2024-05-04T12:00:00Z",
            "reaction_counts": {"like": 3},
            "own_reactions": ["like"]
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert!(message.is_ephemeral());
        assert_eq!(message.args(), Some("/giphy dogs"));
        assert_eq!(message.reaction_counts().get(&ReactionKind::from("like")), Some(&3));
        assert!(message.has_own_reaction(&ReactionKind::from("like")));
    }
}
