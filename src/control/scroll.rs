//! Viewport scrolling
//!
//! The control owns its horizontal scroll offset. Selection changes issue
//! a "follow" scroll: the reveal window is offset by half the selected
//! segment's width in the direction of travel, so the new segment lands
//! just inside the viewport edge it entered from.

use super::SegmentedControl;

impl SegmentedControl {
    /// Scroll so the selected segment's reveal window is visible.
    pub(crate) fn scroll_to_selected(&mut self, animated: bool) {
        let index = match self.selection.selected {
            Some(index) => index,
            None => return,
        };
        let (start, width) = match self.layout.span(index) {
            Some(span) => span,
            None => return,
        };

        let forward = match self.selection.previous {
            Some(previous) => index > previous,
            None => true,
        };
        let direction = if forward { 1.0 } else { -1.0 };

        let reveal_offset = self.frame.width / 2.0 + direction * (width / 2.0);
        let reveal_x = start - reveal_offset;
        let reveal_width = reveal_offset * 2.0;

        self.scroll_rect_to_visible(reveal_x, reveal_width);
        self.scroll_animated = animated;
    }

    fn scroll_rect_to_visible(&mut self, x: f32, width: f32) {
        if x < self.scroll_x {
            self.scroll_x = x;
        }
        if x + width > self.scroll_x + self.frame.width {
            self.scroll_x = x + width - self.frame.width;
        }
        self.clamp_scroll();
    }

    /// Host-driven scroll (drag). Ignored when dragging is disabled.
    pub fn set_scroll_x(&mut self, scroll_x: f32) {
        if !self.is_draggable() {
            return;
        }
        self.scroll_x = scroll_x;
        self.scroll_animated = false;
        self.clamp_scroll();
    }

    /// Whether the last selection-driven scroll asked for animation.
    pub fn scroll_was_animated(&self) -> bool {
        self.scroll_animated
    }

    pub fn max_scroll_x(&self) -> f32 {
        (self.layout.total_width() - self.frame.width).max(0.0)
    }

    pub(crate) fn clamp_scroll(&mut self) {
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn wide_control() -> SegmentedControl {
        // 6 draggable Fixed segments in a 300-wide viewport; content overflows
        let titles = (1..=6).map(|i| format!("Segment {}", i)).collect();
        let mut control = SegmentedControl::new(titles);
        control.set_frame(Rect::new(0.0, 0.0, 300.0, 50.0));
        control
    }

    #[test]
    fn test_no_scroll_when_content_fits() {
        let titles = vec!["One".to_string(), "Two".to_string()];
        let mut control = SegmentedControl::new(titles);
        control.set_frame(Rect::new(0.0, 0.0, 300.0, 50.0));
        control.select(Some(1), false, false);
        assert_eq!(control.scroll_x(), 0.0);
        assert_eq!(control.max_scroll_x(), 0.0);
    }

    #[test]
    fn test_forward_selection_scrolls_content_right() {
        let mut control = wide_control();
        let last = control.section_count() - 1;
        control.select(Some(last), false, false);
        assert!(control.scroll_x() > 0.0);
        assert!(control.scroll_x() <= control.max_scroll_x());

        // Selected segment is inside the viewport
        let (start, width) = control.layout().span(last).unwrap();
        assert!(start >= control.scroll_x());
        assert!(start + width <= control.scroll_x() + control.frame().width);
    }

    #[test]
    fn test_backward_selection_scrolls_content_left() {
        let mut control = wide_control();
        let last = control.section_count() - 1;
        control.select(Some(last), false, false);
        let at_end = control.scroll_x();

        control.select(Some(0), false, false);
        assert!(control.scroll_x() < at_end);
        assert_eq!(control.scroll_x(), 0.0);
    }

    #[test]
    fn test_manual_scroll_clamps_to_content() {
        let mut control = wide_control();
        control.set_scroll_x(10_000.0);
        assert_eq!(control.scroll_x(), control.max_scroll_x());
        control.set_scroll_x(-50.0);
        assert_eq!(control.scroll_x(), 0.0);
    }

    #[test]
    fn test_manual_scroll_ignored_when_drag_disabled() {
        let mut control = wide_control();
        control.set_draggable(false);
        control.set_scroll_x(120.0);
        assert_eq!(control.scroll_x(), 0.0);
    }
}
