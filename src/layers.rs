//! Overlay layer management
//!
//! Two capability-split sets: `PersistentOverlays` owns exactly three
//! long-lived primitives (stripe, box filler, arrow) that survive paint
//! passes through attach/detach, and `TransientLayers` owns everything
//! rebuilt from scratch each pass (backgrounds, borders, dividers). The
//! split makes it impossible for a transient clear to release a persistent
//! layer, so no identity check is needed on cleanup.

use std::time::Duration;

use crate::config::timing;
use crate::geometry::Rect;
use crate::style::Color;

/// The three persistent overlay primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Stripe,
    Box,
    Arrow,
}

/// Timing curve executed by the external animation facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingCurve {
    Linear,
}

/// An explicit frame transition handed to the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub curve: TimingCurve,
}

impl AnimationSpec {
    /// The standard selection transition: 150ms, linear.
    pub fn selection() -> Self {
        Self {
            duration: Duration::from_millis(timing::TRANSITION_MS),
            curve: TimingCurve::Linear,
        }
    }
}

/// How a set of new overlay frames should reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameChange {
    /// Set frames directly; implicit compositor animations are disabled.
    Immediate,
    /// Run an explicit transition from the current frames to the new ones.
    Animated(AnimationSpec),
}

#[derive(Debug, Clone, Copy, Default)]
struct OverlaySlot {
    attached: bool,
    frame: Rect,
}

/// Fixed three-slot set of persistent overlay layers.
///
/// Slots are never iterated generically and never recreated; the in-flight
/// state an external animation may hold against them stays valid across
/// paint passes.
#[derive(Debug, Default)]
pub struct PersistentOverlays {
    stripe: OverlaySlot,
    box_filler: OverlaySlot,
    arrow: OverlaySlot,
    /// Most recent frame change, for the compositor to pick up.
    last_change: Option<FrameChange>,
}

impl PersistentOverlays {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: OverlayKind) -> &OverlaySlot {
        match kind {
            OverlayKind::Stripe => &self.stripe,
            OverlayKind::Box => &self.box_filler,
            OverlayKind::Arrow => &self.arrow,
        }
    }

    fn slot_mut(&mut self, kind: OverlayKind) -> &mut OverlaySlot {
        match kind {
            OverlayKind::Stripe => &mut self.stripe,
            OverlayKind::Box => &mut self.box_filler,
            OverlayKind::Arrow => &mut self.arrow,
        }
    }

    pub fn attach(&mut self, kind: OverlayKind) {
        self.slot_mut(kind).attached = true;
    }

    pub fn detach_all(&mut self) {
        self.stripe.attached = false;
        self.box_filler.attached = false;
        self.arrow.attached = false;
        self.last_change = None;
    }

    pub fn is_attached(&self, kind: OverlayKind) -> bool {
        self.slot(kind).attached
    }

    pub fn frame(&self, kind: OverlayKind) -> Rect {
        self.slot(kind).frame
    }

    pub fn set_frame(&mut self, kind: OverlayKind, frame: Rect) {
        self.slot_mut(kind).frame = frame;
    }

    /// Record how the frames set since the last paint should be applied.
    pub fn record_change(&mut self, change: FrameChange) {
        self.last_change = Some(change);
    }

    /// Whether a frame change is waiting to be drained.
    pub fn has_pending_change(&self) -> bool {
        self.last_change.is_some()
    }

    /// Drain the pending frame change for the compositor.
    pub fn take_change(&mut self) -> Option<FrameChange> {
        self.last_change.take()
    }
}

/// One rebuilt-per-pass overlay rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientLayer {
    pub rect: Rect,
    pub color: Color,
    pub opacity: f32,
}

impl TransientLayer {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            opacity: 1.0,
        }
    }
}

/// Paint-pass-owned layer list, cleared and rebuilt every pass.
#[derive(Debug, Default)]
pub struct TransientLayers {
    layers: Vec<TransientLayer>,
}

impl TransientLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append on top of the current stack.
    pub fn add(&mut self, layer: TransientLayer) {
        self.layers.push(layer);
    }

    /// Insert below the layer currently at `index` (0 = bottom of stack).
    pub fn insert_below(&mut self, layer: TransientLayer, index: usize) {
        let index = index.min(self.layers.len());
        self.layers.insert(index, layer);
    }

    /// Release every transient layer. Persistent overlays live elsewhere
    /// and are untouched by construction.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransientLayer> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_detach_lifecycle() {
        let mut overlays = PersistentOverlays::new();
        assert!(!overlays.is_attached(OverlayKind::Stripe));

        overlays.attach(OverlayKind::Stripe);
        overlays.attach(OverlayKind::Box);
        assert!(overlays.is_attached(OverlayKind::Stripe));
        assert!(overlays.is_attached(OverlayKind::Box));
        assert!(!overlays.is_attached(OverlayKind::Arrow));

        overlays.detach_all();
        assert!(!overlays.is_attached(OverlayKind::Stripe));
        assert!(!overlays.is_attached(OverlayKind::Box));
    }

    #[test]
    fn test_frames_survive_transient_clear() {
        let mut overlays = PersistentOverlays::new();
        let mut transients = TransientLayers::new();

        overlays.attach(OverlayKind::Stripe);
        overlays.set_frame(OverlayKind::Stripe, Rect::new(10.0, 0.0, 40.0, 5.0));
        transients.add(TransientLayer::new(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Color::BLACK,
        ));

        transients.clear();
        assert!(transients.is_empty());
        assert!(overlays.is_attached(OverlayKind::Stripe));
        assert_eq!(
            overlays.frame(OverlayKind::Stripe),
            Rect::new(10.0, 0.0, 40.0, 5.0)
        );
    }

    #[test]
    fn test_insert_below_orders_stack() {
        let mut transients = TransientLayers::new();
        let top = TransientLayer::new(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        let bottom = TransientLayer::new(Rect::new(2.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));

        transients.add(top);
        transients.insert_below(bottom, 0);

        let layers: Vec<_> = transients.iter().copied().collect();
        assert_eq!(layers, vec![bottom, top]);
    }

    #[test]
    fn test_take_change_drains_once() {
        let mut overlays = PersistentOverlays::new();
        overlays.record_change(FrameChange::Animated(AnimationSpec::selection()));
        assert_eq!(
            overlays.take_change(),
            Some(FrameChange::Animated(AnimationSpec::selection()))
        );
        assert_eq!(overlays.take_change(), None);
    }
}
