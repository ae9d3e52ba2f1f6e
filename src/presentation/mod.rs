//! Presentation layer: renders descriptors and performs navigation.

/// Screen stack.
pub mod navigator;
/// Terminal widgets.
pub mod widgets;

pub use navigator::{Navigator, Screen, Transition};
pub use widgets::{MessageCellRenderer, MessageCellStyle};
