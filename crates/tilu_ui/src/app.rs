//! Main application module for TILU Media Player.
//!
//! Holds the iced application state and routes messages to the playback
//! controller. View code lives in `pages`, side-effecting helpers in
//! `handlers`.

use std::path::PathBuf;
use std::time::Duration;

use iced::{keyboard, time, window, Element, Subscription, Task, Theme};

use tilu_core::config::ConfigManager;
use tilu_core::shortcuts::Action;
use tilu_core::{ChannelId, MultiVideoPlayer};

use crate::backend::GstBackend;
use crate::handlers::keyboard::shortcut_message;
use crate::pages;

/// Lower bound for the position poll.
const MIN_POLL_INTERVAL_MS: u64 = 16;

/// All messages the application can receive.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Sidebar
    OpenFiles,
    FilesSelected(Vec<PathBuf>),
    SelectionToggled(ChannelId, bool),
    ApplySelection,

    // Transport
    TogglePlayback,
    Seek(f64),

    // Keyboard
    Shortcut(Action),

    // Playback events
    Tick,
    /// Tagged with the load generation that produced the event.
    EndOfStream(ChannelId, u64),
    PlaybackFailed(ChannelId, u64, String),
}

/// Main application state.
pub struct App {
    pub config: ConfigManager,
    pub player: MultiVideoPlayer<GstBackend>,
    /// A file dialog is currently open.
    pub dialog_open: bool,
}

impl App {
    /// Build the initial state and the startup task.
    pub fn new(config: ConfigManager) -> (Self, Task<Message>) {
        let backend = GstBackend {
            accurate_seek: config.settings().playback.accurate_seek,
        };
        let maximized = config.settings().window.maximized;

        let app = Self {
            config,
            player: MultiVideoPlayer::new(backend),
            dialog_open: false,
        };

        let startup = if maximized {
            window::get_oldest().and_then(|id| window::maximize(id, true))
        } else {
            Task::none()
        };

        (app, startup)
    }

    pub fn title(&self) -> String {
        self.config.settings().window.title.clone()
    }

    pub fn theme(&self) -> Theme {
        crate::theme::theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFiles => {
                if self.dialog_open {
                    return Task::none();
                }
                self.dialog_open = true;
                return self.browse_videos();
            }

            Message::FilesSelected(paths) => {
                self.dialog_open = false;
                self.handle_files_selected(paths);
            }

            Message::SelectionToggled(id, checked) => {
                self.player.set_selected(id, checked);
            }

            Message::ApplySelection => {
                self.player.apply_selection();
            }

            Message::TogglePlayback => {
                self.player.toggle_playback();
            }

            Message::Seek(position) => {
                self.player.seek(position.max(0.0) as u64);
            }

            Message::Shortcut(action) => match action {
                Action::TogglePlayback => return self.update(Message::TogglePlayback),
                Action::OpenFiles => return self.update(Message::OpenFiles),
                Action::ApplySelection => return self.update(Message::ApplySelection),
                Action::ToggleSelection(id) => self.player.toggle_selection(id),
            },

            Message::Tick => {
                self.player.sync_from_leader();
            }

            Message::EndOfStream(id, generation) => {
                if self.player.is_current(generation) {
                    self.player.on_end_of_stream(id);
                }
            }

            Message::PlaybackFailed(id, generation, error) => {
                if !self.player.is_current(generation) {
                    tracing::debug!("{}: dropping stale error: {}", id, error);
                    return Task::none();
                }
                self.player.on_playback_error(id, &error);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::player::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(shortcut_message);

        let has_media = self.player.channels().any(|(_, channel)| channel.has_source());
        if !has_media {
            return keys;
        }

        let interval = self
            .config
            .settings()
            .playback
            .poll_interval_ms
            .max(MIN_POLL_INTERVAL_MS);
        let ticks = time::every(Duration::from_millis(interval)).map(|_| Message::Tick);

        Subscription::batch([keys, ticks])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};
    use tilu_core::{PlayerState, LEADER_CHANNEL};

    fn app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let (app, _) = App::new(ConfigManager::new(dir.path().join("settings.toml")));
        (app, dir)
    }

    fn failed(id: ChannelId, generation: u64) -> Message {
        Message::PlaybackFailed(id, generation, "Internal data stream error.".to_string())
    }

    fn second() -> ChannelId {
        ChannelId::new(1).unwrap()
    }

    #[test]
    fn digit_shortcut_then_apply_hides_channel() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Shortcut(Action::ToggleSelection(second())));
        assert!(!app.player.channel(second()).is_selected());
        assert!(app.player.channel(second()).is_visible());

        let _ = app.update(Message::Shortcut(Action::ApplySelection));
        assert!(!app.player.channel(second()).is_visible());
    }

    #[test]
    fn cancelled_dialog_keeps_transport_disabled() {
        let (mut app, _dir) = app();
        app.dialog_open = true;
        let _ = app.update(Message::FilesSelected(Vec::new()));

        assert!(!app.dialog_open);
        assert!(!app.player.transport().enabled);
    }

    #[test]
    fn missing_leader_file_shows_error() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::FilesSelected(vec![PathBuf::from(
            "/definitely/not/here.mp4",
        )]));

        assert_eq!(app.player.state(), PlayerState::Error);
        assert!(app
            .player
            .error_message()
            .is_some_and(|m| m.starts_with("Error: ")));
    }

    #[test]
    fn playback_failure_on_leader_disables_transport() {
        let (mut app, _dir) = app();
        let _ = app.update(failed(LEADER_CHANNEL, app.player.generation()));

        assert!(!app.player.transport().enabled);
        assert_eq!(
            app.player.error_message(),
            Some("Error: Internal data stream error.")
        );
    }

    #[test]
    fn seek_without_media_is_ignored() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Seek(5000.0));
        assert_eq!(app.player.transport().position_ms, 0);
    }

    #[test]
    fn hidden_leader_failure_still_disables_transport() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::SelectionToggled(LEADER_CHANNEL, false));
        let _ = app.update(Message::ApplySelection);
        assert!(!app.player.channel(LEADER_CHANNEL).is_visible());

        let _ = app.update(failed(LEADER_CHANNEL, app.player.generation()));
        let _ = app.update(Message::Tick);

        assert!(!app.player.transport().enabled);
        assert_eq!(app.player.state(), PlayerState::Error);
        assert!(app.player.error_message().is_some());
    }

    #[test]
    fn stale_failure_is_dropped() {
        let (mut app, _dir) = app();
        let stale = app.player.generation() + 1;
        let _ = app.update(failed(LEADER_CHANNEL, stale));

        assert!(app.player.error_message().is_none());
        assert_ne!(app.player.state(), PlayerState::Error);
    }
}
