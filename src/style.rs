//! Style enums and color/text types for the segment control

use serde::{Deserialize, Serialize};

/// Visual style of the selection indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStyle {
    /// Stripe fitted to the measured width of the selected title
    TextWidthStripe,
    /// Stripe spanning the full segment width
    FullWidthStripe,
    /// Translucent box behind the whole selected segment
    Box,
}

/// Which edge of the control the indicator sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorEdge {
    Up,
    Down,
    /// No indicator; forces its extent to zero
    None,
}

/// How segment widths are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizingPolicy {
    /// All segments share one computed width
    Fixed,
    /// Each segment is as wide as its own content
    Dynamic,
}

/// Which edge of each segment gets a border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderType {
    None,
    Top,
    Left,
    Bottom,
    Right,
}

/// RGBA color with 0.0-1.0 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Default indicator accent (RGB 52, 181, 229).
    pub fn indicator_default() -> Self {
        Self::rgb(52.0 / 255.0, 181.0 / 255.0, 229.0 / 255.0)
    }
}

/// Text attributes used for measuring and painting a title.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color) -> Self {
        Self { font_size, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: crate::config::rendering::TITLE_FONT_SIZE,
            color: Color::BLACK,
        }
    }
}

/// A title string paired with the style it should be measured and drawn with.
///
/// Produced by the default attribute providers or a custom title formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_replaces_only_the_alpha() {
        let accent = Color::indicator_default().with_alpha(0.2);
        assert_eq!(accent.a, 0.2);
        assert_eq!(accent.r, Color::indicator_default().r);
        assert_eq!(accent.g, Color::indicator_default().g);
        assert_eq!(accent.b, Color::indicator_default().b);
    }
}
