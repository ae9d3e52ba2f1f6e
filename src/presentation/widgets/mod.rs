//! Terminal widgets.

mod message_cell;

pub use message_cell::{MessageCellRenderer, MessageCellStyle, aligned_lines, plain_lines};
