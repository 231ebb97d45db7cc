//! Selection state machine
//!
//! Transitions run `Idle -> Transitioning -> Idle` synchronously: the
//! controller commits the new index, repositions the indicator overlays,
//! and hands the interpolation off to the external animation facility.
//! The original widget's "attach, then recurse once non-animated" trick is
//! expressed as two named steps: establish initial frames, then animate.

use log::debug;

use crate::geometry::Rect;
use crate::indicator::{arrow_points, IndicatorFramer};
use crate::layers::{AnimationSpec, FrameChange, OverlayKind};
use crate::style::IndicatorStyle;

use super::{ControlResponse, SegmentedControl};

/// Where the selection controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Transitioning {
        from: Option<usize>,
        to: usize,
        animated: bool,
    },
}

/// The last committed transition, for host introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub animated: bool,
    pub notified: bool,
}

/// Final frames for the three persistent overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndicatorFrames {
    pub stripe: Rect,
    pub filler: Rect,
    pub arrow: Rect,
}

impl SegmentedControl {
    /// Select `target` (or `None` to deselect), optionally animating the
    /// indicator move and notifying the host.
    ///
    /// Re-selecting the current index and out-of-range targets are no-ops.
    pub fn select(
        &mut self,
        target: Option<usize>,
        animated: bool,
        notify: bool,
    ) -> ControlResponse {
        if target == self.selection.selected {
            return ControlResponse::Ignored;
        }
        if let Some(index) = target {
            if index >= self.section_count() {
                return ControlResponse::Ignored;
            }
        }

        self.apply_selection(target, animated, notify);
        ControlResponse::Redraw
    }

    fn apply_selection(&mut self, target: Option<usize>, animated: bool, notify: bool) {
        let previous = self.selection.selected;
        self.selection.previous = previous;
        self.selection.selected = target;

        debug!(
            "selection: {:?} -> {:?} (animated: {}, notify: {})",
            previous, target, animated, notify
        );

        let index = match target {
            Some(index) => index,
            None => {
                // Deselect: drop all persistent overlays, no scroll.
                self.overlays.detach_all();
                self.set_phase(SelectionPhase::Idle);
                let notified = notify && previous.is_some();
                if notified {
                    self.notify_change(None);
                }
                self.record_transition(TransitionRecord {
                    from: previous,
                    to: None,
                    animated: false,
                    notified,
                });
                return;
            }
        };

        self.set_phase(SelectionPhase::Transitioning {
            from: previous,
            to: index,
            animated,
        });

        // Title styles depend on the selection, so geometry moves with it.
        self.relayout();
        self.scroll_to_selected(animated);

        if animated {
            if !self.overlays.is_attached(OverlayKind::Stripe) {
                self.establish_initial_frames(index);
            }
            if notify {
                self.notify_change(Some(index));
            }
            let frames = self.indicator_frames(index);
            self.apply_frames(frames, FrameChange::Animated(AnimationSpec::selection()));
        } else {
            let frames = self.indicator_frames(index);
            self.apply_frames(frames, FrameChange::Immediate);
            if notify {
                self.notify_change(Some(index));
            }
        }

        self.set_phase(SelectionPhase::Idle);
        self.record_transition(TransitionRecord {
            from: previous,
            to: Some(index),
            animated,
            notified: notify,
        });
    }

    /// First animated selection: attach the persistent overlays and set
    /// their frames with implicit animations suppressed, so the explicit
    /// transition that follows has a defined starting point.
    pub(super) fn establish_initial_frames(&mut self, index: usize) {
        self.overlays.attach(OverlayKind::Stripe);
        self.overlays.attach(OverlayKind::Arrow);
        if self.appearance.indicator_style == IndicatorStyle::Box {
            self.overlays.attach(OverlayKind::Box);
        }
        let frames = self.indicator_frames(index);
        self.apply_frames(frames, FrameChange::Immediate);
    }

    pub(super) fn apply_frames(&mut self, frames: IndicatorFrames, change: FrameChange) {
        self.overlays.set_frame(OverlayKind::Stripe, frames.stripe);
        self.overlays.set_frame(OverlayKind::Box, frames.filler);
        self.overlays.set_frame(OverlayKind::Arrow, frames.arrow);
        self.overlays.record_change(change);
    }

    /// Track geometry on a repaint. A transition directive recorded by a
    /// selection and not yet drained must survive the repaint, so this
    /// only records `Immediate` when nothing is pending.
    pub(super) fn reposition_overlays(&mut self, frames: IndicatorFrames) {
        self.overlays.set_frame(OverlayKind::Stripe, frames.stripe);
        self.overlays.set_frame(OverlayKind::Box, frames.filler);
        self.overlays.set_frame(OverlayKind::Arrow, frames.arrow);
        if !self.overlays.has_pending_change() {
            self.overlays.record_change(FrameChange::Immediate);
        }
    }

    /// Compute the three overlay frames for the selected segment under the
    /// current geometry.
    pub(crate) fn indicator_frames(&self, index: usize) -> IndicatorFrames {
        let framer = IndicatorFramer {
            layout: &self.layout,
            style: self.appearance.indicator_style,
            edge: self.appearance.indicator_edge,
            height: self.appearance.effective_indicator_height(),
            insets: self.appearance.indicator_edge_insets,
            container_height: self.frame.height,
        };
        let text_width = self.measured_size(index).width;
        let stripe = framer.stripe_frame(index, text_width);
        IndicatorFrames {
            stripe,
            filler: framer.filler_frame(index),
            arrow: stripe,
        }
    }

    /// Triangle points for the arrow overlay, local to its frame.
    pub fn arrow_triangle(&self) -> [(f32, f32); 3] {
        arrow_points(
            self.overlays.frame(OverlayKind::Arrow),
            self.appearance.indicator_edge,
        )
    }
}
