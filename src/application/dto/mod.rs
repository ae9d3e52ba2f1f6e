//! Descriptors handed to the rendering and navigation layer.

mod cell_action;
mod cell_descriptor;

pub use cell_action::{AttachmentRoute, CellAction, Gesture, Gestures, MediaGalleryItem};
pub use cell_descriptor::{
    ActivityDescriptor, AttachmentClass, AttachmentDescriptor, Body, CellDescriptor, CellHeader,
    Direction, ItemDescriptor, Logo, Padding, ReactionBadge,
};
