//! Centralized configuration constants for segbar
//!
//! All magic numbers and tunable parameters should be defined here.

/// Layout constants (in logical pixels)
pub mod layout {
    /// Default height of the selection indicator stripe
    pub const INDICATOR_HEIGHT: f32 = 5.0;
    /// Width of the segment border lines
    pub const BORDER_WIDTH: f32 = 1.0;
    /// Default width of the vertical divider between segments
    pub const DIVIDER_WIDTH: f32 = 1.0;
    /// Default label padding: top
    pub const LABEL_MARGIN_TOP: f32 = 4.0;
    /// Default label padding: left
    pub const LABEL_MARGIN_LEFT: f32 = 8.0;
    /// Default label padding: bottom
    pub const LABEL_MARGIN_BOTTOM: f32 = 4.0;
    /// Default label padding: right
    pub const LABEL_MARGIN_RIGHT: f32 = 8.0;
}

/// Timing constants (in milliseconds)
pub mod timing {
    /// Duration of the animated indicator transition
    pub const TRANSITION_MS: u64 = 150;
}

/// Rendering constants
pub mod rendering {
    /// Fallback character width ratio (before font measurement)
    pub const FALLBACK_CHAR_WIDTH_RATIO: f32 = 9.0;
    /// Fallback line height ratio relative to font size
    pub const FALLBACK_LINE_HEIGHT_RATIO: f32 = 1.2;
    /// Default font size for segment titles
    pub const TITLE_FONT_SIZE: f32 = 14.0;
    /// Opacity of the translucent box overlay behind the selected segment
    pub const BOX_OPACITY: f32 = 0.2;
}
