//! Shared transport state (play/pause button and position slider).

/// Window-level playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Stopped,
    Playing,
    Paused,
    Error,
}

/// Icon shown on the play button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

impl TransportIcon {
    pub fn label(self) -> &'static str {
        match self {
            TransportIcon::Play => "Play",
            TransportIcon::Pause => "Pause",
        }
    }
}

/// Transport as displayed to the user. Mirrors the leader channel only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportState {
    pub position_ms: u64,
    pub duration_ms: u64,
    pub state: PlayerState,
    /// Play button and seeking are accepted only while enabled.
    pub enabled: bool,
}

impl TransportState {
    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn icon(&self) -> TransportIcon {
        if self.is_playing() {
            TransportIcon::Pause
        } else {
            TransportIcon::Play
        }
    }

    /// Back to a fresh, enabled transport after new files are loaded.
    pub(crate) fn reset_for_new_media(&mut self) {
        self.position_ms = 0;
        self.duration_ms = 0;
        self.state = PlayerState::Stopped;
        self.enabled = true;
    }
}

/// Format milliseconds as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_time(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_transport_is_disabled_and_stopped() {
        let transport = TransportState::default();
        assert!(!transport.enabled);
        assert_eq!(transport.state, PlayerState::Stopped);
        assert_eq!(transport.icon(), TransportIcon::Play);
    }

    #[test]
    fn icon_shows_pause_only_while_playing() {
        let mut transport = TransportState::default();
        transport.state = PlayerState::Playing;
        assert_eq!(transport.icon(), TransportIcon::Pause);
        transport.state = PlayerState::Paused;
        assert_eq!(transport.icon(), TransportIcon::Play);
        transport.state = PlayerState::Error;
        assert_eq!(transport.icon(), TransportIcon::Play);
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65_000), "1:05");
        assert_eq!(format_time(3_725_000), "1:02:05");
    }
}
