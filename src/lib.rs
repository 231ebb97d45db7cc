//! segbar: a horizontally scrollable multi-segment selector widget engine
//!
//! The core is renderer-agnostic: the control computes segment geometry,
//! indicator frames, hit tests, and scroll offsets, and exposes the
//! resulting scene (transient layers, label frames, persistent overlays)
//! for a compositor to paint. A femtovg adapter is included in [`render`].

pub mod appearance;
pub mod config;
mod control;
pub mod geometry;
pub mod hit;
pub mod indicator;
pub mod layers;
pub mod layout;
pub mod measure;
pub mod render;
pub mod style;

pub use appearance::Appearance;
pub use control::{
    ControlEvent, ControlResponse, LabelFrame, SegmentedControl, SelectionPhase, TransitionRecord,
};
pub use geometry::{EdgeInsets, Rect, Size};
pub use layers::{AnimationSpec, FrameChange, OverlayKind, TimingCurve};
pub use layout::SegmentLayout;
pub use measure::{CharWidthMeasurer, FontMeasurer, TextMeasurer, TitleFormatter};
pub use style::{
    BorderType, Color, IndicatorEdge, IndicatorStyle, SizingPolicy, StyledText, TextStyle,
};
