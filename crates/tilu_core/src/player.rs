//! Window controller for three synchronized video channels.
//!
//! Every transport action (play, pause, seek) is fanned out identically to
//! all loaded channels. The leader channel alone drives what the transport
//! displays and whether it stays enabled; the other channels are trusted to
//! track it.

use std::path::{Path, PathBuf};

use crate::channel::{Channel, ChannelId, CHANNEL_COUNT, LEADER_CHANNEL};
use crate::error::PlaybackError;
use crate::media::{MediaBackend, MediaSource};
use crate::transport::{PlayerState, TransportIcon, TransportState};

/// Outcome of [`MultiVideoPlayer::open_files`].
#[derive(Debug, Default)]
pub struct OpenReport {
    pub loaded: Vec<ChannelId>,
    pub failed: Vec<(ChannelId, PlaybackError)>,
    /// Paths beyond the channel count, left unopened.
    pub ignored: Vec<PathBuf>,
}

impl OpenReport {
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty() && self.failed.is_empty()
    }
}

/// Three playback channels behind one transport.
pub struct MultiVideoPlayer<B: MediaBackend> {
    backend: B,
    channels: [Channel<B::Source>; CHANNEL_COUNT],
    transport: TransportState,
    /// Text of the status label, set when the leader fails.
    error_message: Option<String>,
    /// Bumped on every load; events tagged with an older value are stale.
    generation: u64,
}

impl<B: MediaBackend> MultiVideoPlayer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            channels: std::array::from_fn(|_| Channel::default()),
            transport: TransportState::default(),
            error_message: None,
            generation: 0,
        }
    }

    pub fn channel(&self, id: ChannelId) -> &Channel<B::Source> {
        &self.channels[id.index()]
    }

    pub fn channels(&self) -> impl Iterator<Item = (ChannelId, &Channel<B::Source>)> {
        ChannelId::all().zip(self.channels.iter())
    }

    pub fn transport(&self) -> &TransportState {
        &self.transport
    }

    pub fn state(&self) -> PlayerState {
        self.transport.state
    }

    pub fn icon(&self) -> TransportIcon {
        self.transport.icon()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Current load generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an event tagged with `generation` belongs to the loaded media.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    // =========================================================================
    // File loading
    // =========================================================================

    /// Assign up to three files to the channels, in order.
    ///
    /// An empty list (cancelled dialog) changes nothing. Otherwise all
    /// previous sources are released and channels without a path stay empty.
    pub fn open_files(&mut self, paths: &[PathBuf]) -> OpenReport {
        let mut report = OpenReport::default();
        if paths.is_empty() {
            tracing::debug!("Open cancelled, keeping current media");
            return report;
        }

        if paths.len() > CHANNEL_COUNT {
            report.ignored = paths[CHANNEL_COUNT..].to_vec();
            tracing::warn!(
                "{} files selected, only the first {} are opened",
                paths.len(),
                CHANNEL_COUNT
            );
        }

        for channel in &mut self.channels {
            channel.clear();
        }
        self.generation += 1;
        self.transport.reset_for_new_media();
        self.error_message = None;

        for (id, path) in ChannelId::all().zip(paths) {
            match self.backend.open(path) {
                Ok(source) => {
                    tracing::info!("{}: opened {}", id, path.display());
                    self.channels[id.index()].assign(path.clone(), source);
                    report.loaded.push(id);
                }
                Err(err) => {
                    tracing::warn!("{}: failed to open {}: {}", id, path.display(), err);
                    report.failed.push((id, err));
                }
            }
        }

        for (id, err) in &report.failed {
            self.on_playback_error(*id, &err.to_string());
        }

        if let Some(duration) = self.leader().map(MediaSource::duration_ms) {
            self.transport.duration_ms = duration;
        }

        report
    }

    /// Directory of the first opened file, used to seed the next dialog.
    pub fn last_directory(&self) -> Option<&Path> {
        self.channels
            .iter()
            .find_map(Channel::path)
            .and_then(Path::parent)
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Pause everything if the leader is playing, otherwise play everything.
    pub fn toggle_playback(&mut self) -> TransportIcon {
        if !self.transport.enabled {
            tracing::debug!("Toggle ignored, transport disabled");
            return self.icon();
        }

        let leader_playing = self.leader().is_some_and(MediaSource::is_playing);
        for source in self.sources_mut() {
            if leader_playing {
                source.pause();
            } else {
                source.play();
            }
        }

        self.transport.state = if leader_playing {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        };
        tracing::debug!("Transport now {:?}", self.transport.state);
        self.icon()
    }

    /// Command the same absolute position on every loaded channel.
    pub fn seek(&mut self, position_ms: u64) {
        if !self.transport.enabled {
            tracing::debug!("Seek ignored, transport disabled");
            return;
        }

        self.transport.position_ms = position_ms;

        let mut failures = Vec::new();
        for (id, channel) in ChannelId::all().zip(self.channels.iter_mut()) {
            if let Some(source) = channel.source_mut() {
                if let Err(err) = source.seek(position_ms) {
                    failures.push((id, err));
                }
            }
        }

        for (id, err) in failures {
            self.on_playback_error(id, &err.to_string());
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show or hide a render surface. Playback of the channel is untouched.
    pub fn set_visibility(&mut self, id: ChannelId, visible: bool) {
        tracing::debug!("{}: visible = {}", id, visible);
        self.channels[id.index()].set_visible(visible);
    }

    /// Set the checkbox state for a channel.
    pub fn set_selected(&mut self, id: ChannelId, selected: bool) {
        self.channels[id.index()].set_selected(selected);
    }

    /// Flip the checkbox state for a channel.
    pub fn toggle_selection(&mut self, id: ChannelId) {
        let selected = self.channels[id.index()].is_selected();
        self.set_selected(id, !selected);
    }

    /// Make the visible surfaces match the checkboxes ("Display Selected").
    pub fn apply_selection(&mut self) {
        for id in ChannelId::all() {
            let selected = self.channels[id.index()].is_selected();
            self.set_visibility(id, selected);
        }
    }

    // =========================================================================
    // Framework callbacks
    // =========================================================================

    pub fn on_position_changed(&mut self, position_ms: u64) {
        self.transport.position_ms = position_ms;
    }

    pub fn on_duration_changed(&mut self, duration_ms: u64) {
        tracing::debug!("Duration now {} ms", duration_ms);
        self.transport.duration_ms = duration_ms;
    }

    /// End of stream. Only the leader moves the transport back to Stopped.
    pub fn on_end_of_stream(&mut self, id: ChannelId) {
        if let Some(source) = self.channels[id.index()].source_mut() {
            source.mark_ended();
        }
        if !id.is_leader() {
            return;
        }
        if self.transport.state == PlayerState::Playing {
            tracing::info!("{} reached end of stream", id);
            self.transport.state = PlayerState::Stopped;
        }
    }

    /// Report a playback failure.
    ///
    /// A leader failure disables the transport and fills the status label.
    /// A follower failure is only recorded on its channel; the transport and
    /// the other channels keep running.
    pub fn on_playback_error(&mut self, id: ChannelId, message: &str) {
        if id.is_leader() {
            tracing::error!("{}: playback error: {}", id, message);
            self.transport.enabled = false;
            self.transport.state = PlayerState::Error;
            self.error_message = Some(format!("Error: {}", message));
        } else {
            tracing::warn!("{}: playback error: {}", id, message);
            self.channels[id.index()].set_error(message);
        }
    }

    /// Pull position, duration and end-of-stream from the leader.
    pub fn sync_from_leader(&mut self) {
        let Some((position, duration, ended)) = self
            .leader()
            .map(|s| (s.position_ms(), s.duration_ms(), s.at_end()))
        else {
            return;
        };

        if duration != self.transport.duration_ms {
            self.on_duration_changed(duration);
        }
        if position != self.transport.position_ms {
            self.on_position_changed(position);
        }
        if ended {
            self.on_end_of_stream(LEADER_CHANNEL);
        }
    }

    fn leader(&self) -> Option<&B::Source> {
        self.channels[LEADER_CHANNEL.index()].source()
    }

    fn sources_mut(&mut self) -> impl Iterator<Item = &mut B::Source> {
        self.channels.iter_mut().filter_map(Channel::source_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fake::FakeBackend;

    fn id(index: usize) -> ChannelId {
        ChannelId::new(index).unwrap()
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn loaded_player() -> MultiVideoPlayer<FakeBackend> {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        player.open_files(&paths(&["a.mp4", "b.mp4", "c.mp4"]));
        player
    }

    fn playing(player: &MultiVideoPlayer<FakeBackend>, index: usize) -> bool {
        player.channel(id(index)).source().unwrap().is_playing()
    }

    #[test]
    fn opening_three_files_enables_transport() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        let report = player.open_files(&paths(&["a.mp4", "b.mp4", "c.mp4"]));

        assert_eq!(report.loaded, vec![id(0), id(1), id(2)]);
        assert!(report.failed.is_empty());
        assert!(player.transport().enabled);
        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.transport().duration_ms, 10_000);
    }

    #[test]
    fn opening_no_files_leaves_transport_disabled() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        let report = player.open_files(&[]);

        assert!(report.is_empty());
        assert!(!player.transport().enabled);
    }

    #[test]
    fn cancelled_open_keeps_current_media() {
        let mut player = loaded_player();
        player.open_files(&[]);

        assert!(player.channel(id(2)).has_source());
        assert!(player.transport().enabled);
    }

    #[test]
    fn each_open_starts_a_new_generation() {
        let mut player = loaded_player();
        let first = player.generation();

        player.open_files(&[]);
        assert!(player.is_current(first));

        player.open_files(&paths(&["d.mp4"]));
        assert!(!player.is_current(first));
        assert_eq!(player.generation(), first + 1);
    }

    #[test]
    fn fewer_files_leave_trailing_channels_empty() {
        let mut player = loaded_player();
        player.open_files(&paths(&["x.mp4"]));

        assert_eq!(player.channel(id(0)).path(), Some(Path::new("x.mp4")));
        assert!(!player.channel(id(1)).has_source());
        assert!(!player.channel(id(2)).has_source());
        assert!(player.transport().enabled);
    }

    #[test]
    fn extra_files_are_ignored() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        let report = player.open_files(&paths(&["a.mp4", "b.mp4", "c.mp4", "d.mp4"]));

        assert_eq!(report.loaded.len(), 3);
        assert_eq!(report.ignored, paths(&["d.mp4"]));
    }

    #[test]
    fn sources_open_paused() {
        let player = loaded_player();
        assert!((0..3).all(|i| !playing(&player, i)));
    }

    #[test]
    fn toggle_plays_all_when_leader_stopped() {
        let mut player = loaded_player();
        let icon = player.toggle_playback();

        assert!((0..3).all(|i| playing(&player, i)));
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(icon, TransportIcon::Pause);
    }

    #[test]
    fn toggle_pauses_all_when_leader_playing() {
        let mut player = loaded_player();
        player.toggle_playback();
        let icon = player.toggle_playback();

        assert!((0..3).all(|i| !playing(&player, i)));
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(icon, TransportIcon::Play);
    }

    #[test]
    fn toggle_without_media_does_nothing() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        assert_eq!(player.toggle_playback(), TransportIcon::Play);
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn hiding_a_channel_keeps_it_playing() {
        let mut player = loaded_player();
        player.toggle_playback();
        player.set_visibility(id(1), false);

        assert!(!player.channel(id(1)).is_visible());
        assert!(playing(&player, 1));
        assert!(player.channel(id(0)).is_visible());
    }

    #[test]
    fn seek_commands_every_channel() {
        let mut player = loaded_player();
        assert_eq!(player.transport().duration_ms, 10_000);

        player.seek(5000);

        assert_eq!(player.transport().position_ms, 5000);
        for i in 0..3 {
            assert_eq!(player.channel(id(i)).source().unwrap().seeks, vec![5000]);
        }
    }

    #[test]
    fn seek_is_ignored_while_disabled() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        player.seek(5000);
        assert_eq!(player.transport().position_ms, 0);
    }

    #[test]
    fn leader_failure_disables_transport_with_message() {
        let mut player = loaded_player();
        player.toggle_playback();
        player.on_playback_error(LEADER_CHANNEL, "decode failure");

        assert!(!player.transport().enabled);
        assert_eq!(player.state(), PlayerState::Error);
        assert_eq!(player.error_message(), Some("Error: decode failure"));
        // Followers are not halted.
        assert!(playing(&player, 1));
        assert!(playing(&player, 2));
    }

    #[test]
    fn error_blocks_transport_until_new_files() {
        let mut player = loaded_player();
        player.on_playback_error(LEADER_CHANNEL, "decode failure");

        player.toggle_playback();
        assert!(!playing(&player, 0));

        player.open_files(&paths(&["d.mp4"]));
        assert!(player.transport().enabled);
        assert!(player.error_message().is_none());
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn follower_failure_is_recorded_on_channel_only() {
        let mut player = loaded_player();
        player.on_playback_error(id(2), "codec missing");

        assert!(player.transport().enabled);
        assert!(player.error_message().is_none());
        assert_eq!(player.channel(id(2)).error(), Some("codec missing"));
    }

    #[test]
    fn invalid_leader_path_reports_error() {
        let backend = FakeBackend::new().with_broken("missing.mp4");
        let mut player = MultiVideoPlayer::new(backend);
        let report = player.open_files(&paths(&["missing.mp4", "b.mp4"]));

        assert_eq!(report.failed.len(), 1);
        assert!(!player.channel(id(0)).has_source());
        assert!(player.channel(id(1)).has_source());
        assert!(!player.transport().enabled);
        assert!(player
            .error_message()
            .is_some_and(|m| m.contains("missing.mp4")));
    }

    #[test]
    fn invalid_follower_path_keeps_transport() {
        let backend = FakeBackend::new().with_broken("bad.mp4");
        let mut player = MultiVideoPlayer::new(backend);
        player.open_files(&paths(&["a.mp4", "bad.mp4"]));

        assert!(player.transport().enabled);
        assert!(!player.channel(id(1)).has_source());
        assert!(player.channel(id(1)).error().is_some());
    }

    #[test]
    fn leader_seek_failure_disables_transport() {
        let mut player = loaded_player();
        player.channels[0].source_mut().unwrap().fail_seek = true;

        player.seek(1000);

        assert!(!player.transport().enabled);
        assert!(player.error_message().is_some());
        assert_eq!(player.channel(id(1)).source().unwrap().seeks, vec![1000]);
    }

    #[test]
    fn selection_applies_to_visibility() {
        let mut player = loaded_player();
        player.toggle_selection(id(0));
        player.set_selected(id(2), false);

        // Checkboxes alone do not hide anything.
        assert!(player.channel(id(0)).is_visible());

        player.apply_selection();
        assert!(!player.channel(id(0)).is_visible());
        assert!(player.channel(id(1)).is_visible());
        assert!(!player.channel(id(2)).is_visible());

        player.toggle_selection(id(0));
        player.apply_selection();
        assert!(player.channel(id(0)).is_visible());
    }

    #[test]
    fn sync_tracks_leader_only() {
        let mut player = loaded_player();
        player.channels[1].source_mut().unwrap().position_ms = 9000;
        {
            let leader = player.channels[0].source_mut().unwrap();
            leader.position_ms = 1234;
            leader.duration_ms = 20_000;
        }

        player.sync_from_leader();

        assert_eq!(player.transport().position_ms, 1234);
        assert_eq!(player.transport().duration_ms, 20_000);
    }

    #[test]
    fn leader_end_of_stream_stops_transport() {
        let mut player = loaded_player();
        player.toggle_playback();

        player.on_end_of_stream(id(1));
        assert_eq!(player.state(), PlayerState::Playing);

        player.channels[0].source_mut().unwrap().ended = true;
        player.sync_from_leader();
        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.icon(), TransportIcon::Play);
    }

    #[test]
    fn toggle_after_end_of_stream_plays_again() {
        let mut player = loaded_player();
        player.toggle_playback();
        player.channels[0].source_mut().unwrap().ended = true;
        player.sync_from_leader();

        assert!(!playing(&player, 0));
        player.toggle_playback();
        assert!(playing(&player, 0));
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn last_directory_follows_first_loaded_file() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        assert!(player.last_directory().is_none());

        player.open_files(&paths(&["/videos/day1/a.mp4", "/videos/b.mp4"]));
        assert_eq!(player.last_directory(), Some(Path::new("/videos/day1")));
    }

    #[test]
    fn open_then_toggle_plays_everything() {
        let mut player = MultiVideoPlayer::new(FakeBackend::new());
        player.open_files(&paths(&["a.mp4", "b.mp4", "c.mp4"]));
        player.toggle_playback();

        assert!((0..3).all(|i| playing(&player, i)));
        assert_eq!(player.icon(), TransportIcon::Pause);
    }
}
