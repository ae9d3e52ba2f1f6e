//! Message attachment entity.

use serde::{Deserialize, Serialize};

/// Attachment type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Imgur,
    Giphy,
    Video,
    Youtube,
    Product,
    File,
    Link,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AttachmentKind {
    /// Returns true for kinds shown as a still image.
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(self, Self::Image | Self::Imgur | Self::Giphy)
    }

    /// Returns true for kinds opened in the media gallery.
    #[must_use]
    pub const fn is_image_or_video(self) -> bool {
        self.is_image() || matches!(self, Self::Video)
    }
}

/// Visual style of an ephemeral action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Default,
    Primary,
}

/// Button attached to an ephemeral message (e.g. send/shuffle/cancel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentAction {
    pub name: String,
    pub value: String,
    pub text: String,
    #[serde(default)]
    pub style: ActionStyle,
}

impl AttachmentAction {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            text: text.into(),
            style: ActionStyle::Default,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }
}

/// Chat message attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    #[serde(rename = "type", default)]
    kind: AttachmentKind,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    actions: Vec<AttachmentAction>,
}

impl Attachment {
    #[must_use]
    pub fn new(kind: AttachmentKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            url: None,
            image_url: None,
            text: None,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: Vec<AttachmentAction>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> AttachmentKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn actions(&self) -> &[AttachmentAction] {
        &self.actions
    }

    #[must_use]
    pub const fn is_image_or_video(&self) -> bool {
        self.kind.is_image_or_video()
    }

    #[must_use]
    pub fn is_giphy(&self) -> bool {
        self.kind == AttachmentKind::Giphy
    }

    /// URL shown in a media gallery: the image URL, else the plain URL.
    #[must_use]
    pub fn media_url(&self) -> Option<&str> {
        self.image_url().or_else(|| self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AttachmentKind::Image, true ; "image")]
    #[test_case(AttachmentKind::Imgur, true ; "imgur")]
    #[test_case(AttachmentKind::Giphy, true ; "giphy")]
    #[test_case(AttachmentKind::Video, true ; "video")]
    #[test_case(AttachmentKind::Youtube, false ; "youtube")]
    #[test_case(AttachmentKind::Link, false ; "link")]
    #[test_case(AttachmentKind::File, false ; "file")]
    #[test_case(AttachmentKind::Unknown, false ; "unknown")]
    fn test_is_image_or_video(kind: AttachmentKind, expected: bool) {
        assert_eq!(Attachment::new(kind, "t").is_image_or_video(), expected);
    }

    #[test]
    fn test_media_url_prefers_image_url() {
        let attachment = Attachment::new(AttachmentKind::Giphy, "cat")
            .with_url("https://giphy.com/cat")
            .with_image_url("https://media.giphy.com/cat.gif");
        assert_eq!(attachment.media_url(), Some("https://media.giphy.com/cat.gif"));

        let plain = Attachment::new(AttachmentKind::Video, "clip").with_url("https://v/clip.mp4");
        assert_eq!(plain.media_url(), Some("https://v/clip.mp4"));
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let attachment: Attachment =
            serde_json::from_str(r#"{"type":"hologram","title":"x"}"#).unwrap();
        assert_eq!(attachment.kind(), AttachmentKind::Unknown);
        assert!(attachment.actions().is_empty());
    }
}
