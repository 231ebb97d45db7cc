//! Appearance configuration and persistence
//!
//! Every visual knob of the control lives here as a plain value field so a
//! host can persist and restore a look without touching control state.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{layout, rendering};
use crate::geometry::EdgeInsets;
use crate::style::{BorderType, Color, IndicatorEdge, IndicatorStyle, SizingPolicy, TextStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub sizing_policy: SizingPolicy,
    pub indicator_style: IndicatorStyle,
    pub indicator_edge: IndicatorEdge,
    pub indicator_height: f32,
    pub indicator_color: Color,
    /// Insets applied to the indicator frame
    pub indicator_edge_insets: EdgeInsets,
    /// Opacity of the box filler overlay
    pub box_opacity: f32,
    pub text_style: TextStyle,
    pub selected_text_style: TextStyle,
    /// Extra width added around each segment's measured title
    pub segment_edge_inset: EdgeInsets,
    /// Padding between a segment's bounds and its label
    pub label_margins: EdgeInsets,
    pub vertical_divider_enabled: bool,
    pub vertical_divider_color: Color,
    pub vertical_divider_width: f32,
    pub border_type: BorderType,
    pub border_color: Color,
    pub border_width: f32,
    pub background_color: Option<Color>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            sizing_policy: SizingPolicy::Fixed,
            indicator_style: IndicatorStyle::TextWidthStripe,
            indicator_edge: IndicatorEdge::Up,
            indicator_height: layout::INDICATOR_HEIGHT,
            indicator_color: Color::indicator_default(),
            indicator_edge_insets: EdgeInsets::default(),
            box_opacity: rendering::BOX_OPACITY,
            text_style: TextStyle::default(),
            selected_text_style: TextStyle::default(),
            segment_edge_inset: EdgeInsets::default(),
            label_margins: EdgeInsets::new(
                layout::LABEL_MARGIN_TOP,
                layout::LABEL_MARGIN_LEFT,
                layout::LABEL_MARGIN_BOTTOM,
                layout::LABEL_MARGIN_RIGHT,
            ),
            vertical_divider_enabled: false,
            vertical_divider_color: Color::BLACK,
            vertical_divider_width: layout::DIVIDER_WIDTH,
            border_type: BorderType::None,
            border_color: Color::BLACK,
            border_width: layout::BORDER_WIDTH,
            background_color: None,
        }
    }
}

impl Appearance {
    /// Effective indicator height: an edge of `None` forces it to zero.
    pub fn effective_indicator_height(&self) -> f32 {
        match self.indicator_edge {
            IndicatorEdge::None => 0.0,
            _ => self.indicator_height,
        }
    }

    pub fn style_for(&self, selected: bool) -> TextStyle {
        if selected {
            self.selected_text_style
        } else {
            self.text_style
        }
    }
}

/// Default config path: `<config_dir>/segbar/appearance.json`
pub fn default_appearance_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("segbar").join("appearance.json")
}

pub fn load_appearance(path: &PathBuf) -> Option<Appearance> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_appearance(path: &PathBuf, appearance: &Appearance) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = serde_json::to_string_pretty(appearance)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    fs::write(path, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_none_zeroes_indicator_height() {
        let mut appearance = Appearance::default();
        appearance.indicator_height = 5.0;
        appearance.indicator_edge = IndicatorEdge::None;
        assert_eq!(appearance.effective_indicator_height(), 0.0);

        appearance.indicator_edge = IndicatorEdge::Down;
        assert_eq!(appearance.effective_indicator_height(), 5.0);
    }

    #[test]
    fn test_appearance_roundtrip() {
        let mut appearance = Appearance::default();
        appearance.indicator_style = IndicatorStyle::Box;
        appearance.vertical_divider_enabled = true;

        let payload = serde_json::to_string(&appearance).unwrap();
        let restored: Appearance = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, appearance);
    }
}
