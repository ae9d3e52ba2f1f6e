//! Use case implementations.

mod describe_channel_use_case;
mod open_replies_use_case;

pub use describe_channel_use_case::DescribeChannelUseCase;
pub use open_replies_use_case::{OpenRepliesUseCase, ThreadContext};
