//! TILU Core - Playback control logic for TILU Media Player
//!
//! This crate contains the window controller for three synchronized video
//! channels with zero UI dependencies. The GUI crate plugs a real media
//! backend into [`player::MultiVideoPlayer`]; tests plug in a fake one.

pub mod channel;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod player;
pub mod shortcuts;
pub mod transport;

pub use channel::{Channel, ChannelId, CHANNEL_COUNT, LEADER_CHANNEL};
pub use error::PlaybackError;
pub use media::{MediaBackend, MediaSource};
pub use player::{MultiVideoPlayer, OpenReport};
pub use transport::{PlayerState, TransportIcon, TransportState};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
