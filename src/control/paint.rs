//! Paint pass: transient layer rebuild and label framing
//!
//! Every pass discards the whole transient set (per-segment backgrounds,
//! borders, dividers) and rebuilds it from current geometry, then
//! repositions the attached persistent overlays. There is no diffing.

use crate::geometry::Rect;
use crate::layers::{OverlayKind, TransientLayer};
use crate::layout::SegmentLayout;
use crate::style::{BorderType, Color, IndicatorEdge, IndicatorStyle, StyledText};

use super::SegmentedControl;

/// Where a title should be drawn, and with which style.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFrame {
    pub index: usize,
    pub rect: Rect,
    pub styled: StyledText,
    pub selected: bool,
}

impl SegmentedControl {
    /// Rebuild transient layers and label frames for the current state.
    ///
    /// An empty title set produces an empty scene.
    pub fn rebuild_scene(&mut self) {
        self.transients.clear();
        self.labels.clear();

        if self.layout.is_empty() {
            return;
        }

        let indicator_height = self.appearance.effective_indicator_height();
        let up = self.appearance.indicator_edge == IndicatorEdge::Up;
        let style_not_box = self.appearance.indicator_style != IndicatorStyle::Box;
        let margins = self.appearance.label_margins;
        let divider_width = self.appearance.vertical_divider_width;
        let frame_height = self.frame.height;

        for index in 0..self.layout.count() {
            let styled = self.styled_title(index);
            let size = self.measured_size(index);
            let (start, segment_width) = match self.layout.span(index) {
                Some(span) => span,
                None => continue,
            };

            // Vertical label placement; the box style centers on the full
            // height, other styles bias by the indicator on an Up edge.
            let y = ((frame_height - if style_not_box { 1.0 } else { 0.0 }) / 2.0
                - size.height / 2.0
                + indicator_height * if up { 1.0 } else { 0.0 })
            .round();

            let fixed = matches!(self.layout, SegmentLayout::Fixed { .. });
            let (label_rect, full_rect, divider_x) = if fixed && !self.is_draggable() {
                let text_width = segment_width - margins.left - margins.right;
                (
                    Rect::new(
                        start + (segment_width - text_width) / 2.0,
                        0.0,
                        text_width,
                        frame_height - indicator_height - margins.top - margins.bottom,
                    ),
                    Rect::new(start, 0.0, segment_width, frame_height - indicator_height),
                    start + divider_width / 2.0,
                )
            } else if fixed {
                (
                    Rect::new(
                        start + (segment_width - size.width) / 2.0,
                        y,
                        size.width,
                        size.height,
                    ),
                    Rect::new(start, 0.0, segment_width, frame_height),
                    start + divider_width / 2.0,
                )
            } else {
                (
                    Rect::new(start, y, segment_width, size.height),
                    Rect::new(start, 0.0, segment_width, frame_height),
                    start - divider_width / 2.0,
                )
            };

            if self.appearance.vertical_divider_enabled {
                let divider_rect = Rect::new(
                    divider_x,
                    indicator_height * 2.0,
                    divider_width,
                    frame_height - indicator_height * 4.0,
                );
                self.transients.add(TransientLayer::new(
                    divider_rect,
                    self.appearance.vertical_divider_color,
                ));
            }

            let background = self
                .appearance
                .background_color
                .unwrap_or(Color::rgba(0.0, 0.0, 0.0, 0.0));
            self.transients
                .insert_below(TransientLayer::new(full_rect, background), 0);

            if let Some(border_rect) = border_rect(
                self.appearance.border_type,
                full_rect,
                self.appearance.border_width,
            ) {
                self.transients
                    .add(TransientLayer::new(border_rect, self.appearance.border_color));
            }

            self.labels.push(LabelFrame {
                index,
                rect: label_rect.ceiled(),
                styled,
                selected: self.selection.selected == Some(index),
            });
        }

        // Persistent overlays track current geometry. First paint with a
        // selection attaches them in place, without animation.
        if let Some(index) = self.selection.selected {
            if self.overlays.is_attached(OverlayKind::Stripe) {
                let frames = self.indicator_frames(index);
                self.reposition_overlays(frames);
            } else {
                self.establish_initial_frames(index);
            }
        }
    }

    pub fn labels(&self) -> &[LabelFrame] {
        &self.labels
    }

    pub fn transient_layers(&self) -> impl Iterator<Item = &TransientLayer> {
        self.transients.iter()
    }
}

/// Border line rectangle for one segment, or `None` for `BorderType::None`.
fn border_rect(border_type: BorderType, full: Rect, border_width: f32) -> Option<Rect> {
    match border_type {
        BorderType::None => None,
        BorderType::Top => Some(Rect::new(full.x, full.y, full.width, border_width)),
        BorderType::Left => Some(Rect::new(full.x, full.y, border_width, full.height)),
        BorderType::Bottom => Some(Rect::new(
            full.x,
            full.y + full.height - border_width,
            full.width,
            border_width,
        )),
        BorderType::Right => Some(Rect::new(
            full.x + full.width - border_width,
            full.y,
            border_width,
            full.height,
        )),
    }
}
