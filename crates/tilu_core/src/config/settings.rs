//! Settings struct with TOML-based sections.
//!
//! Each section maps to a TOML table and can be rewritten on its own.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Main window chrome.
    #[serde(default)]
    pub window: WindowSettings,

    /// Playback behavior.
    #[serde(default)]
    pub playback: PlaybackSettings,

    /// Remembered and configured paths.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Config file sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Window,
    Playback,
    Paths,
    Logging,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Window,
        ConfigSection::Playback,
        ConfigSection::Paths,
        ConfigSection::Logging,
    ];

    /// TOML table name.
    pub fn table_name(self) -> &'static str {
        match self {
            ConfigSection::Window => "window",
            ConfigSection::Playback => "playback",
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the table.
    pub(crate) fn description(self) -> &'static str {
        match self {
            ConfigSection::Window => "Main window",
            ConfigSection::Playback => "Playback behavior",
            ConfigSection::Paths => "Remembered and configured paths",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,

    /// Start maximized.
    #[serde(default = "default_true")]
    pub maximized: bool,

    /// Size used when not maximized.
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    /// Window icon; ignored when the file does not exist.
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
}

fn default_title() -> String {
    "TILU Media Player".to_string()
}

fn default_true() -> bool {
    true
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    720.0
}

fn default_icon_path() -> String {
    "icon.png".to_string()
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            maximized: true,
            width: default_width(),
            height: default_height(),
            icon_path: default_icon_path(),
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Frame-accurate seeks instead of keyframe seeks (slower).
    #[serde(default)]
    pub accurate_seek: bool,

    /// How often the leader's position is polled.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    200
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            accurate_seek: false,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory the file dialog opens in. Empty means the home directory.
    #[serde(default)]
    pub last_open_dir: String,

    /// Folder for log files. Empty means `logs` next to the config file.
    #[serde(default)]
    pub logs_folder: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file.
    #[serde(default = "default_true")]
    pub file_output: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file_output: true,
        }
    }
}
