//! Channel snapshots loaded from JSON files.
//!
//! A snapshot stands in for a live channel presenter: it holds the channel,
//! the ordered items and the replies of threaded messages.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::use_cases::ThreadContext;
use crate::domain::entities::{Channel, ChannelConfig, Item, Message, MessageId};
use crate::domain::ports::ChannelPresenterPort;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message {0} not found in snapshot")]
    UnknownMessage(MessageId),
}

#[derive(Debug, Deserialize)]
struct ChannelSnapshot {
    channel: Channel,
    #[serde(default)]
    parent_message: Option<Message>,
    #[serde(default)]
    show_statuses: Option<bool>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    replies: Vec<Message>,
}

/// Defaults applied to fields a snapshot leaves out.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotDefaults {
    pub channel: ChannelConfig,
    pub show_statuses: bool,
}

impl Default for SnapshotDefaults {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default(),
            show_statuses: true,
        }
    }
}

/// In-memory channel presenter backed by a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotPresenter {
    channel: Channel,
    parent_message: Option<Message>,
    show_statuses: bool,
    items: Vec<Item>,
    replies: Vec<Message>,
}

impl SnapshotPresenter {
    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the file cannot be read or parsed.
    pub fn load(path: &Path, defaults: SnapshotDefaults) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let presenter = Self::from_json(&content, defaults)?;

        info!(
            path = %path.display(),
            channel = %presenter.channel.id(),
            items = presenter.items.len(),
            replies = presenter.replies.len(),
            "Snapshot loaded"
        );
        Ok(presenter)
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Json` on malformed input.
    pub fn from_json(content: &str, defaults: SnapshotDefaults) -> Result<Self, SnapshotError> {
        let snapshot: ChannelSnapshot = serde_json::from_str(content)?;

        Ok(Self {
            channel: snapshot.channel.or_config(defaults.channel),
            parent_message: snapshot.parent_message,
            show_statuses: snapshot.show_statuses.unwrap_or(defaults.show_statuses),
            items: snapshot.items,
            replies: snapshot.replies,
        })
    }

    /// Finds a message among the items, the replies and the thread parent.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::UnknownMessage` if no message has this id.
    pub fn find_message(&self, id: &MessageId) -> Result<&Message, SnapshotError> {
        self.items
            .iter()
            .filter_map(Item::as_message)
            .chain(self.replies.iter())
            .chain(self.parent_message.iter())
            .find(|message| message.id() == id)
            .ok_or_else(|| SnapshotError::UnknownMessage(id.clone()))
    }

    /// Builds the presenter of a reply thread: the parent followed by its
    /// replies in snapshot order.
    #[must_use]
    pub fn thread(&self, context: ThreadContext) -> Self {
        let parent_id = context.parent_message.id().clone();
        let mut items = vec![Item::from(context.parent_message.clone())];
        items.extend(
            self.replies
                .iter()
                .filter(|reply| reply.parent_id() == Some(&parent_id))
                .cloned()
                .map(Item::from),
        );

        debug!(parent = %parent_id, count = items.len() - 1, "Built reply thread");

        Self {
            channel: context.channel,
            parent_message: Some(context.parent_message),
            show_statuses: context.show_statuses,
            items,
            replies: self.replies.clone(),
        }
    }
}

impl ChannelPresenterPort for SnapshotPresenter {
    fn channel(&self) -> &Channel {
        &self.channel
    }

    fn parent_message(&self) -> Option<Message> {
        self.parent_message.clone()
    }

    fn show_statuses(&self) -> bool {
        self.show_statuses
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }
}
