use tracing::debug;

use crate::application::dto::{AttachmentRoute, Logo, MediaGalleryItem};
use crate::domain::entities::Attachment;

/// Decides where a tapped attachment opens.
pub struct AttachmentRouter;

impl AttachmentRouter {
    /// Routes a tap on `attachments[index]`.
    ///
    /// Images and videos open the media gallery built from every image/video
    /// attachment of the message, with the tapped one selected. Anything else
    /// opens its URL in a web view. Returns `None` for an out-of-range index
    /// or a non-media attachment without URL.
    #[must_use]
    pub fn route(attachments: &[Attachment], index: usize) -> Option<AttachmentRoute> {
        let tapped = attachments.get(index)?;

        if tapped.is_image_or_video() {
            let selected_index = attachments[..index]
                .iter()
                .filter(|a| a.is_image_or_video())
                .count();
            let items: Vec<MediaGalleryItem> = attachments
                .iter()
                .filter(|a| a.is_image_or_video())
                .map(|a| MediaGalleryItem {
                    title: a.title().to_string(),
                    url: a.media_url().map(String::from),
                    logo: a.is_giphy().then_some(Logo::Giphy),
                })
                .collect();

            debug!(
                count = items.len(),
                selected_index, "Routing attachment to media gallery"
            );
            return Some(AttachmentRoute::MediaGallery {
                items,
                selected_index,
            });
        }

        let Some(url) = tapped.url() else {
            debug!(index, "Attachment has no URL, nothing to open");
            return None;
        };

        Some(AttachmentRoute::WebView {
            url: url.to_string(),
            title: tapped.title().to_string(),
        })
    }
}
