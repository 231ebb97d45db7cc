//! Segmented control state and coordination

mod paint;
mod scroll;
mod selection;
mod touch;

use log::debug;

use crate::appearance::Appearance;
use crate::geometry::{Rect, Size};
use crate::layers::{PersistentOverlays, TransientLayers};
use crate::layout::SegmentLayout;
use crate::measure::{CharWidthMeasurer, TextMeasurer, TitleFormatter};
use crate::style::StyledText;

pub use paint::LabelFrame;
pub use selection::{SelectionPhase, TransitionRecord};

/// Result of feeding an event to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlResponse {
    /// Nothing changed
    Ignored,
    /// State changed; the host should repaint
    Redraw,
}

/// Outbound notifications, drained by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The selection committed to a new index (`None` = deselected)
    ValueChanged { index: Option<usize> },
}

/// Current and previous selection. `previous` only feeds the scroll
/// direction and is updated at the start of every transition.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SelectionState {
    pub selected: Option<usize>,
    pub previous: Option<usize>,
}

/// Interactive, horizontally scrollable multi-segment selector.
///
/// The control owns geometry, selection state, and the overlay layers; the
/// host feeds it frame changes and touches and paints the resulting scene.
pub struct SegmentedControl {
    titles: Vec<String>,
    measured: Vec<Size>,
    layout: SegmentLayout,
    frame: Rect,
    scroll_x: f32,
    scroll_animated: bool,
    appearance: Appearance,
    draggable: bool,
    touch_enabled: bool,
    animate_user_selection: bool,
    pub(crate) selection: SelectionState,
    phase: SelectionPhase,
    last_transition: Option<TransitionRecord>,
    pub(crate) overlays: PersistentOverlays,
    pub(crate) transients: TransientLayers,
    labels: Vec<LabelFrame>,
    measurer: Box<dyn TextMeasurer>,
    title_formatter: Option<TitleFormatter>,
    on_index_change: Option<Box<dyn FnMut(Option<usize>)>>,
    events: Vec<ControlEvent>,
}

impl SegmentedControl {
    pub fn new(titles: Vec<String>) -> Self {
        Self::with_measurer(titles, Box::new(CharWidthMeasurer::default()))
    }

    pub fn with_measurer(titles: Vec<String>, measurer: Box<dyn TextMeasurer>) -> Self {
        let mut control = Self {
            titles,
            measured: Vec::new(),
            layout: SegmentLayout::Fixed {
                width: 0.0,
                count: 0,
            },
            frame: Rect::default(),
            scroll_x: 0.0,
            scroll_animated: false,
            appearance: Appearance::default(),
            draggable: true,
            touch_enabled: true,
            animate_user_selection: true,
            selection: SelectionState {
                selected: Some(0),
                previous: None,
            },
            phase: SelectionPhase::Idle,
            last_transition: None,
            overlays: PersistentOverlays::new(),
            transients: TransientLayers::new(),
            labels: Vec::new(),
            measurer,
            title_formatter: None,
            on_index_change: None,
            events: Vec::new(),
        };
        if control.titles.is_empty() {
            control.selection.selected = None;
        }
        control.relayout();
        control
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// Frame/bounds change from the host; triggers a full geometry
    /// recompute.
    pub fn set_frame(&mut self, frame: Rect) -> ControlResponse {
        if frame == self.frame {
            return ControlResponse::Ignored;
        }
        self.frame = frame;
        self.relayout();
        ControlResponse::Redraw
    }

    /// Replace the section titles. Indices restart; a selection past the
    /// new count is dropped.
    pub fn set_titles(&mut self, titles: Vec<String>) -> ControlResponse {
        self.titles = titles;
        if let Some(selected) = self.selection.selected {
            if selected >= self.titles.len() {
                self.selection.selected = None;
                self.overlays.detach_all();
            }
        }
        self.relayout();
        ControlResponse::Redraw
    }

    // =========================================================================
    // Configuration surface
    // =========================================================================

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.relayout();
    }

    /// Whether the user may drag-scroll the content. Affects Fixed-policy
    /// width expansion.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
        self.relayout();
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    pub fn set_animate_user_selection(&mut self, animate: bool) {
        self.animate_user_selection = animate;
    }

    /// Override default title styling/measurement.
    pub fn set_title_formatter(&mut self, formatter: Option<TitleFormatter>) {
        self.title_formatter = formatter;
        self.relayout();
    }

    /// Attach the selection-changed listener.
    pub fn on_index_change(&mut self, callback: impl FnMut(Option<usize>) + 'static) {
        self.on_index_change = Some(Box::new(callback));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn section_count(&self) -> usize {
        self.titles.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn last_transition(&self) -> Option<TransitionRecord> {
        self.last_transition
    }

    /// Drain pending outbound events.
    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Measurement & layout
    // =========================================================================

    pub(crate) fn styled_title(&self, index: usize) -> StyledText {
        let title = &self.titles[index];
        let selected = self.selection.selected == Some(index);
        match &self.title_formatter {
            Some(formatter) => formatter(title, index, selected),
            None => StyledText::new(title.clone(), self.appearance.style_for(selected)),
        }
    }

    /// Re-measure every title with its current (selection-dependent) style
    /// and recompute segment geometry.
    pub(crate) fn relayout(&mut self) {
        self.measured.clear();
        for index in 0..self.titles.len() {
            let styled = self.styled_title(index);
            let size = self.measurer.measure(&styled.text, &styled.style);
            self.measured.push(size);
        }

        self.layout = SegmentLayout::compute(
            &self.measured,
            self.frame.width,
            self.appearance.sizing_policy,
            self.draggable,
            self.appearance.segment_edge_inset,
        );
        self.clamp_scroll();

        debug!(
            "relayout: {} segments, total width {:.1}",
            self.layout.count(),
            self.layout.total_width()
        );
    }

    pub(crate) fn measured_size(&self, index: usize) -> Size {
        self.measured.get(index).copied().unwrap_or_default()
    }

    pub(crate) fn set_phase(&mut self, phase: SelectionPhase) {
        self.phase = phase;
    }

    pub(crate) fn record_transition(&mut self, record: TransitionRecord) {
        self.last_transition = Some(record);
    }

    pub(crate) fn notify_change(&mut self, index: Option<usize>) {
        self.events.push(ControlEvent::ValueChanged { index });
        if let Some(callback) = &mut self.on_index_change {
            callback(index);
        }
    }

    pub(crate) fn touch_allowed(&self) -> bool {
        self.touch_enabled
    }

    pub(crate) fn animate_user_selection(&self) -> bool {
        self.animate_user_selection
    }
}
