//! Media backend seam.
//!
//! The controller never decodes anything itself. A [`MediaBackend`] turns a
//! local file into a [`MediaSource`] handle owned by the host multimedia
//! framework; the controller only commands and queries those handles.

use std::path::Path;

use crate::error::PlaybackError;

/// A single opened media file.
///
/// Dropping the source releases every framework resource behind it.
pub trait MediaSource {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Whether the framework currently reports the source as playing.
    fn is_playing(&self) -> bool;

    /// Seek to an absolute position in milliseconds.
    fn seek(&mut self, position_ms: u64) -> Result<(), PlaybackError>;

    /// Current playback position in milliseconds.
    fn position_ms(&self) -> u64;

    /// Total duration in milliseconds, 0 while still unknown.
    fn duration_ms(&self) -> u64;

    /// Whether playback has reached the end of the stream.
    fn at_end(&self) -> bool;

    /// The stream ended; the source is now paused at its last frame.
    fn mark_ended(&mut self);
}

/// Opens files into playable sources.
pub trait MediaBackend {
    type Source: MediaSource;

    /// Open `path` and return a paused source.
    fn open(&self, path: &Path) -> Result<Self::Source, PlaybackError>;
}
