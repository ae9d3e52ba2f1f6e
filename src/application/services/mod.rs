pub mod attachment_router;
pub mod emoji_classifier;
pub mod gesture_policy;
pub mod message_presentation_service;

pub use attachment_router::AttachmentRouter;
pub use emoji_classifier::EmojiClassifier;
pub use gesture_policy::GesturePolicy;
pub use message_presentation_service::{MessagePresentationService, PresentationContext};
