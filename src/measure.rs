//! Text measurement for segment titles
//!
//! The control never rasterizes text itself; it only needs the extent a
//! title will occupy. `TextMeasurer` is the seam to whatever text stack the
//! host runs. `FontMeasurer` shapes with cosmic-text for real metrics;
//! `CharWidthMeasurer` is the zero-dependency fallback approximation.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};

use crate::config::rendering;
use crate::geometry::Size;
use crate::style::{StyledText, TextStyle};

/// Override hook for title styling: `(title, index, selected) -> styled text`.
pub type TitleFormatter = Box<dyn Fn(&str, usize, bool) -> StyledText>;

pub trait TextMeasurer {
    /// Measure the extent of `text` under `style`.
    ///
    /// Implementations must not fail; a measurer that cannot resolve a font
    /// should return a zero size.
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size;
}

/// Approximate measurer using a fixed character-width ratio.
#[derive(Debug, Clone, Copy)]
pub struct CharWidthMeasurer {
    /// Width of one character as a fraction of the font size
    pub width_ratio: f32,
}

impl Default for CharWidthMeasurer {
    fn default() -> Self {
        Self {
            width_ratio: rendering::FALLBACK_CHAR_WIDTH_RATIO / rendering::TITLE_FONT_SIZE,
        }
    }
}

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let char_width = style.font_size * self.width_ratio;
        Size::new(
            text.chars().count() as f32 * char_width,
            style.font_size * rendering::FALLBACK_LINE_HEIGHT_RATIO,
        )
    }
}

/// Measurer backed by cosmic-text shaping.
pub struct FontMeasurer {
    font_system: FontSystem,
}

impl FontMeasurer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }
}

impl Default for FontMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let line_height = style.font_size * rendering::FALLBACK_LINE_HEIGHT_RATIO;
        let metrics = Metrics::new(style.font_size, line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, Some(f32::MAX), Some(f32::MAX));
        buffer.set_text(&mut self.font_system, text, Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut width = 0.0_f32;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        Size::new(width, lines.max(1) as f32 * line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_char_width_measurer_scales_with_length() {
        let mut measurer = CharWidthMeasurer::default();
        let style = TextStyle::new(14.0, Color::BLACK);
        let short = measurer.measure("ab", &style);
        let long = measurer.measure("abcd", &style);
        assert_eq!(long.width, short.width * 2.0);
        assert!(short.height > 0.0);
    }

    #[test]
    fn test_empty_title_measures_zero() {
        let mut measurer = CharWidthMeasurer::default();
        let style = TextStyle::default();
        assert_eq!(measurer.measure("", &style), Size::default());
    }
}
