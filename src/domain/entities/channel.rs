//! Chat channel entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a chat channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Per-channel capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Threaded replies are allowed.
    #[serde(default = "default_true")]
    pub replies_enabled: bool,

    /// Reactions are allowed.
    #[serde(default = "default_true")]
    pub reactions_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            replies_enabled: true,
            reactions_enabled: true,
        }
    }
}

/// Chat channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    config: Option<ChannelConfig>,
}

impl Channel {
    /// Creates a channel with the given capabilities.
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, config: ChannelConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config: Some(config),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ChannelId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the channel configuration, or defaults when none was sent.
    #[must_use]
    pub fn config(&self) -> ChannelConfig {
        self.config.unwrap_or_default()
    }

    /// Returns true if the channel carried an explicit configuration.
    #[must_use]
    pub const fn has_config(&self) -> bool {
        self.config.is_some()
    }

    /// Fills in a missing configuration.
    #[must_use]
    pub fn or_config(mut self, fallback: ChannelConfig) -> Self {
        self.config = Some(self.config.unwrap_or(fallback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_enabled() {
        let config: ChannelConfig = serde_json::from_str("{}").unwrap();
        assert!(config.replies_enabled);
        assert!(config.reactions_enabled);
    }

    #[test]
    fn test_or_config_keeps_explicit() {
        let explicit = ChannelConfig {
            replies_enabled: false,
            reactions_enabled: true,
        };
        let fallback = ChannelConfig {
            replies_enabled: true,
            reactions_enabled: false,
        };

        let channel = Channel::new("general", "General", explicit).or_config(fallback);
        assert_eq!(channel.config(), explicit);

        let bare: Channel = serde_json::from_str(r#"{"id":"random"}"#).unwrap();
        assert!(!bare.has_config());
        assert_eq!(bare.or_config(fallback).config(), fallback);
    }
}
