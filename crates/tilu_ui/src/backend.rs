//! GStreamer media backend.
//!
//! Wraps `iced_video_player::Video`, which owns a GStreamer pipeline per
//! file. The controller only sees it through `MediaSource`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use iced_video_player::{Position, Video};
use tilu_core::{MediaBackend, MediaSource, PlaybackError};
use url::Url;

/// Opens local files into GStreamer pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct GstBackend {
    /// Frame-accurate seeks instead of keyframe seeks.
    pub accurate_seek: bool,
}

impl MediaBackend for GstBackend {
    type Source = VideoSource;

    fn open(&self, path: &Path) -> Result<VideoSource, PlaybackError> {
        let absolute =
            fs::canonicalize(path).map_err(|_| PlaybackError::NotFound(path.to_path_buf()))?;
        let url = Url::from_file_path(&absolute)
            .map_err(|()| PlaybackError::InvalidPath(absolute.clone()))?;

        let mut video = Video::new(&url).map_err(|e| PlaybackError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        video.set_paused(true);
        let duration_ms = duration_to_ms(video.duration());

        tracing::debug!("Pipeline ready for {} ({} ms)", url, duration_ms);
        Ok(VideoSource {
            video,
            accurate_seek: self.accurate_seek,
            paused: true,
            duration_ms,
        })
    }
}

/// One GStreamer-backed channel source.
///
/// Pipeline state is cached here: querying it blocks the UI thread.
pub struct VideoSource {
    video: Video,
    accurate_seek: bool,
    paused: bool,
    duration_ms: u64,
}

impl VideoSource {
    /// The video handle rendered by `VideoPlayer`.
    pub fn video(&self) -> &Video {
        &self.video
    }
}

impl MediaSource for VideoSource {
    fn play(&mut self) {
        // Playing again after the end restarts from the beginning.
        if self.video.eos() {
            if let Err(e) = self.video.seek(Position::Time(Duration::ZERO), false) {
                tracing::warn!("Rewind failed: {}", e);
            }
        }
        self.video.set_paused(false);
        self.paused = false;
    }

    fn pause(&mut self) {
        self.video.set_paused(true);
        self.paused = true;
    }

    fn is_playing(&self) -> bool {
        !self.paused
    }

    fn seek(&mut self, position_ms: u64) -> Result<(), PlaybackError> {
        self.video
            .seek(
                Position::Time(Duration::from_millis(position_ms)),
                self.accurate_seek,
            )
            .map_err(|e| PlaybackError::Seek {
                reason: e.to_string(),
            })
    }

    fn position_ms(&self) -> u64 {
        duration_to_ms(self.video.position())
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    // Flag set by the `VideoPlayer` widget, no pipeline query.
    fn at_end(&self) -> bool {
        self.video.eos()
    }

    fn mark_ended(&mut self) {
        self.paused = true;
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let backend = GstBackend::default();
        let result = backend.open(Path::new("/definitely/not/here.mp4"));
        assert!(matches!(result, Err(PlaybackError::NotFound(_))));
    }

    #[test]
    fn duration_conversion() {
        assert_eq!(duration_to_ms(Duration::from_secs(2)), 2000);
        assert_eq!(duration_to_ms(Duration::from_micros(1500)), 1);
    }
}
