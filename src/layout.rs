//! Segment geometry calculation
//!
//! Computes per-segment widths and offsets for the two sizing policies.
//! All downstream consumers (indicator framing, hit testing, scrolling)
//! branch on the resulting tagged layout instead of re-deriving widths.

use crate::geometry::{EdgeInsets, Size};
use crate::style::SizingPolicy;

/// Resolved segment geometry for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentLayout {
    /// Every segment shares one width.
    Fixed { width: f32, count: usize },
    /// Each segment has its own content-derived width.
    Dynamic { widths: Vec<f32> },
}

impl SegmentLayout {
    /// Compute the layout from measured title sizes.
    ///
    /// Fixed + non-draggable: uniform share of the available width.
    /// Fixed + draggable: the share, widened to the largest padded title so
    /// content may exceed the viewport and scroll.
    /// Dynamic: each segment is its padded measured width.
    pub fn compute(
        measured: &[Size],
        available_width: f32,
        policy: SizingPolicy,
        draggable: bool,
        segment_inset: EdgeInsets,
    ) -> Self {
        let count = measured.len();

        match policy {
            SizingPolicy::Fixed => {
                let mut width = if count > 0 {
                    available_width / count as f32
                } else {
                    0.0
                };

                if draggable {
                    for size in measured {
                        width = width.max(size.width + segment_inset.horizontal());
                    }
                }

                SegmentLayout::Fixed { width, count }
            }
            SizingPolicy::Dynamic => {
                let widths = measured
                    .iter()
                    .map(|size| size.width + segment_inset.horizontal())
                    .collect();
                SegmentLayout::Dynamic { widths }
            }
        }
    }

    pub fn count(&self) -> usize {
        match self {
            SegmentLayout::Fixed { count, .. } => *count,
            SegmentLayout::Dynamic { widths } => widths.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Horizontal start offset and width of segment `index`.
    pub fn span(&self, index: usize) -> Option<(f32, f32)> {
        if index >= self.count() {
            return None;
        }
        match self {
            SegmentLayout::Fixed { width, .. } => Some((width * index as f32, *width)),
            SegmentLayout::Dynamic { widths } => {
                let start = widths.iter().take(index).sum();
                Some((start, widths[index]))
            }
        }
    }

    /// Total content width, used as the scroll extent.
    pub fn total_width(&self) -> f32 {
        match self {
            SegmentLayout::Fixed { width, count } => width * *count as f32,
            SegmentLayout::Dynamic { widths } => widths.iter().sum(),
        }
    }
}
