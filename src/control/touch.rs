//! Touch handling

use crate::hit;

use super::{ControlResponse, SegmentedControl};

impl SegmentedControl {
    /// Pointer/touch released at `(x, y)` in the control's local space.
    ///
    /// Resolves the touched segment under the current scroll offset and
    /// drives a selection transition when it differs from the current one.
    /// Touches outside the control's bounds or between/past segments are
    /// ignored.
    pub fn touch_ended(&mut self, x: f32, y: f32) -> ControlResponse {
        let bounds = crate::geometry::Rect::new(0.0, 0.0, self.frame.width, self.frame.height);
        if !bounds.contains(x, y) {
            return ControlResponse::Ignored;
        }

        let segment = match hit::hit_test(&self.layout, x, self.scroll_x()) {
            Some(segment) => segment,
            None => return ControlResponse::Ignored,
        };

        if Some(segment) == self.selection.selected || !self.touch_allowed() {
            return ControlResponse::Ignored;
        }

        let animated = self.animate_user_selection();
        self.select(Some(segment), animated, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlEvent;
    use crate::geometry::Rect;

    fn control() -> SegmentedControl {
        let titles = vec!["One".to_string(), "Two".to_string(), "Three".to_string()];
        let mut control = SegmentedControl::new(titles);
        control.set_draggable(false);
        control.set_frame(Rect::new(0.0, 0.0, 300.0, 50.0));
        control
    }

    #[test]
    fn test_touch_selects_segment_under_pointer() {
        let mut control = control();
        // Fixed non-draggable: 3 segments of 100; x=150 is segment 1
        assert_eq!(control.touch_ended(150.0, 25.0), ControlResponse::Redraw);
        assert_eq!(control.selected_index(), Some(1));
        assert_eq!(
            control.take_events(),
            vec![ControlEvent::ValueChanged { index: Some(1) }]
        );
    }

    #[test]
    fn test_touch_outside_bounds_is_ignored() {
        let mut control = control();
        assert_eq!(control.touch_ended(150.0, 80.0), ControlResponse::Ignored);
        assert_eq!(control.touch_ended(-10.0, 25.0), ControlResponse::Ignored);
        assert_eq!(control.selected_index(), Some(0));
    }

    #[test]
    fn test_touch_on_current_segment_is_ignored() {
        let mut control = control();
        assert_eq!(control.touch_ended(50.0, 25.0), ControlResponse::Ignored);
        assert!(control.take_events().is_empty());
    }

    #[test]
    fn test_touch_disabled_blocks_selection() {
        let mut control = control();
        control.set_touch_enabled(false);
        assert_eq!(control.touch_ended(150.0, 25.0), ControlResponse::Ignored);
        assert_eq!(control.selected_index(), Some(0));
    }

    #[test]
    fn test_touch_accounts_for_scroll_offset() {
        let titles = (1..=6).map(|i| format!("Segment {}", i)).collect();
        let mut control = SegmentedControl::new(titles);
        control.set_frame(Rect::new(0.0, 0.0, 300.0, 50.0));
        control.set_scroll_x(control.max_scroll_x());

        let (width, count) = match control.layout() {
            crate::layout::SegmentLayout::Fixed { width, count } => (*width, *count),
            _ => unreachable!(),
        };
        let last = count - 1;
        let (start, _) = control.layout().span(last).unwrap();
        let local_x = start + width / 2.0 - control.scroll_x();

        assert_eq!(control.touch_ended(local_x, 25.0), ControlResponse::Redraw);
        assert_eq!(control.selected_index(), Some(last));
    }
}
