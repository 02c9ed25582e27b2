//! Theme configuration for TILU Media Player.
//!
//! Dark palette plus spacing and font constants shared by the views.

use iced::{Color, Theme};

/// The application theme.
pub fn theme() -> Theme {
    Theme::Dark
}

/// Application colors.
pub mod colors {
    use super::Color;

    /// Backdrop behind video surfaces
    pub const SURFACE: Color = Color::from_rgb(0.05, 0.05, 0.05);

    /// Border around empty surfaces
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);

    /// Error label text
    pub const ERROR_TEXT: Color = Color::from_rgb(0.90, 0.35, 0.35);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Text muted
    pub const TEXT_MUTED: Color = Color::from_rgb(0.40, 0.40, 0.40);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (12px)
    pub const MD: u16 = 12;
    /// Large spacing (16px)
    pub const LG: u16 = 16;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: u16 = 11;
    /// Normal font size
    pub const NORMAL: u16 = 13;
}

/// Fixed sidebar width.
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Gap above the sidebar buttons.
pub const SIDEBAR_TOP_GAP: f32 = 100.0;
