//! Playback channels.
//!
//! A channel pairs one media source with its render surface state. The
//! window always owns exactly [`CHANNEL_COUNT`] channels.

use std::fmt;
use std::path::{Path, PathBuf};

/// Number of channels shown side by side.
pub const CHANNEL_COUNT: usize = 3;

/// The channel whose position, duration and errors drive the transport.
pub const LEADER_CHANNEL: ChannelId = ChannelId(0);

/// Index of a channel, always in `0..CHANNEL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(usize);

impl ChannelId {
    /// Build an id from a zero-based index, `None` when out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < CHANNEL_COUNT).then_some(Self(index))
    }

    /// Zero-based index.
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number used in labels ("Video 1").
    pub fn number(self) -> usize {
        self.0 + 1
    }

    pub fn is_leader(self) -> bool {
        self == LEADER_CHANNEL
    }

    /// All channel ids in display order.
    pub fn all() -> impl Iterator<Item = ChannelId> {
        (0..CHANNEL_COUNT).map(ChannelId)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Video {}", self.number())
    }
}

/// One playback channel.
#[derive(Debug)]
pub struct Channel<S> {
    source: Option<S>,
    path: Option<PathBuf>,
    /// Render surface shown in the window.
    visible: bool,
    /// Checkbox state, applied to `visible` by "Display Selected".
    selected: bool,
    /// Last error reported for this channel while it is not the leader.
    error: Option<String>,
}

impl<S> Default for Channel<S> {
    fn default() -> Self {
        Self {
            source: None,
            path: None,
            visible: true,
            selected: true,
            error: None,
        }
    }
}

impl<S> Channel<S> {
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Install a freshly opened source, dropping the old one.
    pub(crate) fn assign(&mut self, path: PathBuf, source: S) {
        self.source = Some(source);
        self.path = Some(path);
        self.error = None;
    }

    /// Release the source, if any. The framework frees it on drop.
    pub(crate) fn clear(&mut self) {
        self.source = None;
        self.path = None;
        self.error = None;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}
