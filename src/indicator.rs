//! Selection indicator framing
//!
//! Computes the rectangles for the stripe and filler box overlays and the
//! triangle for the arrow overlay, given the current segment geometry and
//! the selected index.

use crate::geometry::{EdgeInsets, Rect};
use crate::layout::SegmentLayout;
use crate::style::{IndicatorEdge, IndicatorStyle};

/// Inputs for one indicator framing pass.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorFramer<'a> {
    pub layout: &'a SegmentLayout,
    pub style: IndicatorStyle,
    pub edge: IndicatorEdge,
    /// Effective indicator height (zero when the edge is `None`)
    pub height: f32,
    pub insets: EdgeInsets,
    /// Height of the control's frame
    pub container_height: f32,
}

impl IndicatorFramer<'_> {
    fn y_offset(&self) -> f32 {
        match self.edge {
            IndicatorEdge::Down => self.container_height - self.height + self.insets.bottom,
            IndicatorEdge::Up => self.insets.top,
            IndicatorEdge::None => 0.0,
        }
    }

    /// Frame for the stripe (and the box outline) of the selected segment.
    ///
    /// `text_width` is the measured width of the selected title. A
    /// text-width stripe under the Fixed policy gets a tight, centered
    /// stripe whenever the text fits the segment; the `<=` tie-break keeps
    /// the tight path for exactly-fitting text.
    pub fn stripe_frame(&self, selected: usize, text_width: f32) -> Rect {
        let y = self.y_offset();
        let (start, segment_width) = match self.layout.span(selected) {
            Some(span) => span,
            None => return Rect::default(),
        };

        let fits_fixed = matches!(self.layout, SegmentLayout::Fixed { .. })
            && self.style == IndicatorStyle::TextWidthStripe
            && text_width <= segment_width;

        if fits_fixed {
            let x = start + (segment_width - text_width) / 2.0;
            return Rect::new(
                x + self.insets.left,
                y,
                text_width - self.insets.right,
                self.height,
            );
        }

        match self.layout {
            SegmentLayout::Dynamic { .. } => Rect::new(
                start + self.insets.left,
                y,
                segment_width - self.insets.right,
                self.height + self.insets.bottom,
            ),
            SegmentLayout::Fixed { .. } => Rect::new(
                start + self.insets.left,
                y,
                segment_width - self.insets.right,
                self.height,
            ),
        }
    }

    /// Frame for the translucent filler behind the whole selected segment
    /// (Box style only).
    pub fn filler_frame(&self, selected: usize) -> Rect {
        match self.layout.span(selected) {
            Some((start, width)) => Rect::new(start, 0.0, width, self.container_height),
            None => Rect::default(),
        }
    }
}

/// Triangle for the arrow overlay, in coordinates local to `frame`.
///
/// The apex points toward the content: bottom-center for an `Up` edge,
/// top-center for a `Down` edge. A `None` edge degenerates to a zero-area
/// path.
pub fn arrow_points(frame: Rect, edge: IndicatorEdge) -> [(f32, f32); 3] {
    match edge {
        IndicatorEdge::Down => [
            (frame.width / 2.0, 0.0),
            (0.0, frame.height),
            (frame.width, frame.height),
        ],
        IndicatorEdge::Up => [
            (frame.width / 2.0, frame.height),
            (frame.width, 0.0),
            (0.0, 0.0),
        ],
        IndicatorEdge::None => [(0.0, 0.0); 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framer(layout: &SegmentLayout, style: IndicatorStyle, edge: IndicatorEdge) -> IndicatorFramer<'_> {
        IndicatorFramer {
            layout,
            style,
            edge,
            height: 5.0,
            insets: EdgeInsets::default(),
            container_height: 50.0,
        }
    }

    #[test]
    fn test_text_width_stripe_centers_within_fixed_segment() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 3,
        };
        let framer = framer(&layout, IndicatorStyle::TextWidthStripe, IndicatorEdge::Up);
        // segment 1 spans [100, 200); text of 40 centers at 130
        let frame = framer.stripe_frame(1, 40.0);
        assert_eq!(frame, Rect::new(130.0, 0.0, 40.0, 5.0));
    }

    #[test]
    fn test_equal_width_text_keeps_tight_path() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 3,
        };
        let framer = framer(&layout, IndicatorStyle::TextWidthStripe, IndicatorEdge::Up);
        let frame = framer.stripe_frame(1, 100.0);
        assert_eq!(frame.x, 100.0);
        assert_eq!(frame.width, 100.0);
    }

    #[test]
    fn test_overflowing_text_falls_back_to_full_span() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 3,
        };
        let framer = framer(&layout, IndicatorStyle::TextWidthStripe, IndicatorEdge::Up);
        let frame = framer.stripe_frame(1, 140.0);
        assert_eq!(frame, Rect::new(100.0, 0.0, 100.0, 5.0));
    }

    #[test]
    fn test_dynamic_stripe_spans_selected_segment() {
        let layout = SegmentLayout::Dynamic {
            widths: vec![80.0, 120.0, 60.0],
        };
        let framer = framer(&layout, IndicatorStyle::FullWidthStripe, IndicatorEdge::Up);
        let frame = framer.stripe_frame(2, 30.0);
        assert_eq!(frame, Rect::new(200.0, 0.0, 60.0, 5.0));
    }

    #[test]
    fn test_down_edge_sits_at_container_bottom() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 2,
        };
        let framer = framer(&layout, IndicatorStyle::FullWidthStripe, IndicatorEdge::Down);
        let frame = framer.stripe_frame(0, 40.0);
        assert_eq!(frame.y, 45.0);
    }

    #[test]
    fn test_filler_covers_full_segment_height() {
        let layout = SegmentLayout::Dynamic {
            widths: vec![80.0, 120.0, 60.0],
        };
        let framer = framer(&layout, IndicatorStyle::Box, IndicatorEdge::Down);
        let frame = framer.filler_frame(1);
        assert_eq!(frame, Rect::new(80.0, 0.0, 120.0, 50.0));
    }

    #[test]
    fn test_out_of_range_selection_frames_are_empty() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 2,
        };
        let framer = framer(&layout, IndicatorStyle::Box, IndicatorEdge::Up);
        assert_eq!(framer.stripe_frame(5, 40.0), Rect::default());
        assert_eq!(framer.filler_frame(5), Rect::default());
    }

    #[test]
    fn test_arrow_apex_points_toward_content() {
        let frame = Rect::new(0.0, 0.0, 20.0, 10.0);
        // Indicator on the top edge: apex at the triangle's bottom-center
        let up = arrow_points(frame, IndicatorEdge::Up);
        assert_eq!(up[0], (10.0, 10.0));
        // Indicator on the bottom edge: apex at the top-center
        let down = arrow_points(frame, IndicatorEdge::Down);
        assert_eq!(down[0], (10.0, 0.0));
        // No edge: degenerate path
        assert_eq!(arrow_points(frame, IndicatorEdge::None), [(0.0, 0.0); 3]);
    }
}
