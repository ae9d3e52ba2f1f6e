//! Application layer with presentation services, use cases and descriptors.

/// Descriptors consumed by the presentation layer.
pub mod dto;
/// Pure presentation decisions.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AttachmentRoute, CellAction, CellDescriptor, ItemDescriptor};
pub use services::{AttachmentRouter, GesturePolicy, MessagePresentationService, PresentationContext};
pub use use_cases::{DescribeChannelUseCase, OpenRepliesUseCase, ThreadContext};
