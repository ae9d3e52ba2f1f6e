mod channel_presenter_port;

pub use channel_presenter_port::ChannelPresenterPort;

#[cfg(test)]
pub use channel_presenter_port::MockChannelPresenterPort;
