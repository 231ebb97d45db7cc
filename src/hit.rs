//! Pointer-to-segment hit testing

use crate::layout::SegmentLayout;

/// Map a pointer x coordinate (in the control's space) plus the current
/// horizontal scroll offset to a segment index.
///
/// Coordinates that land outside `[0, count)` resolve to `None` and are
/// treated as "no change" by the caller.
pub fn hit_test(layout: &SegmentLayout, pointer_x: f32, scroll_x: f32) -> Option<usize> {
    if layout.is_empty() {
        return None;
    }

    let content_x = pointer_x + scroll_x;

    match layout {
        SegmentLayout::Fixed { width, count } => {
            if *width <= 0.0 {
                return None;
            }
            let index = (content_x / width).floor();
            if index < 0.0 || index as usize >= *count {
                None
            } else {
                Some(index as usize)
            }
        }
        SegmentLayout::Dynamic { widths } => {
            let mut remaining = content_x;
            for (index, width) in widths.iter().enumerate() {
                remaining -= width;
                if remaining <= 0.0 {
                    return Some(index);
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_hit_resolves_by_stride() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 3,
        };
        assert_eq!(hit_test(&layout, 150.0, 0.0), Some(1));
        assert_eq!(hit_test(&layout, 0.0, 0.0), Some(0));
        assert_eq!(hit_test(&layout, 299.0, 0.0), Some(2));
        assert_eq!(hit_test(&layout, 301.0, 0.0), None);
        assert_eq!(hit_test(&layout, -5.0, 0.0), None);
    }

    #[test]
    fn test_fixed_hit_accounts_for_scroll() {
        let layout = SegmentLayout::Fixed {
            width: 100.0,
            count: 5,
        };
        assert_eq!(hit_test(&layout, 50.0, 300.0), Some(3));
    }

    #[test]
    fn test_dynamic_hit_walks_widths() {
        let layout = SegmentLayout::Dynamic {
            widths: vec![80.0, 120.0, 60.0],
        };
        assert_eq!(hit_test(&layout, 40.0, 0.0), Some(0));
        assert_eq!(hit_test(&layout, 81.0, 0.0), Some(1));
        assert_eq!(hit_test(&layout, 210.0, 0.0), Some(2));
        assert_eq!(hit_test(&layout, 261.0, 0.0), None);
    }

    #[test]
    fn test_hit_round_trip_at_segment_centers() {
        let fixed = SegmentLayout::Fixed {
            width: 100.0,
            count: 4,
        };
        let dynamic = SegmentLayout::Dynamic {
            widths: vec![80.0, 120.0, 60.0, 40.0],
        };
        for layout in [fixed, dynamic] {
            let scroll_x = 25.0;
            for index in 0..layout.count() {
                let (start, width) = layout.span(index).unwrap();
                let pointer_x = start + width / 2.0 - scroll_x;
                assert_eq!(hit_test(&layout, pointer_x, scroll_x), Some(index));
            }
        }
    }

    #[test]
    fn test_empty_layout_never_hits() {
        let layout = SegmentLayout::Dynamic { widths: vec![] };
        assert_eq!(hit_test(&layout, 10.0, 0.0), None);
        let layout = SegmentLayout::Fixed {
            width: 0.0,
            count: 0,
        };
        assert_eq!(hit_test(&layout, 10.0, 0.0), None);
    }
}
