//! femtovg paint adapter
//!
//! Draws a control's scene into a femtovg canvas: transient rects first,
//! the box filler, then labels, with the stripe and arrow overlays on top.
//! The control core never depends on this module; hosts with their own
//! compositor can consume the scene directly.

use femtovg::{renderer::OpenGl, Canvas, FontId, Paint, Path};

use crate::control::SegmentedControl;
use crate::layers::OverlayKind;
use crate::style::{Color, IndicatorEdge};

/// Snap a coordinate to the pixel grid to prevent blurry text rendering.
#[inline]
fn snap_to_pixel(coord: f32) -> f32 {
    coord.round()
}

fn paint_color(color: Color, opacity: f32) -> femtovg::Color {
    femtovg::Color::rgba(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        (color.a * opacity * 255.0) as u8,
    )
}

pub struct ControlPainter<'a> {
    canvas: &'a mut Canvas<OpenGl>,
    fonts: &'a [FontId],
}

impl<'a> ControlPainter<'a> {
    pub fn new(canvas: &'a mut Canvas<OpenGl>, fonts: &'a [FontId]) -> Self {
        Self { canvas, fonts }
    }

    pub fn draw(&mut self, control: &SegmentedControl) {
        let frame = control.frame();

        // Save state for clipping
        self.canvas.save();
        self.canvas
            .intersect_scissor(frame.x, frame.y, frame.width, frame.height);
        self.canvas.translate(frame.x - control.scroll_x(), frame.y);

        for layer in control.transient_layers() {
            self.fill_rect(layer.rect, layer.color, layer.opacity);
        }

        let appearance = control.appearance();
        if control.overlays.is_attached(OverlayKind::Box) {
            self.fill_rect(
                control.overlays.frame(OverlayKind::Box),
                appearance.indicator_color.with_alpha(appearance.box_opacity),
                1.0,
            );
        }

        for label in control.labels() {
            self.draw_label(&label.styled.text, label.rect, label.styled.style);
        }

        if control.overlays.is_attached(OverlayKind::Stripe) {
            self.fill_rect(
                control.overlays.frame(OverlayKind::Stripe),
                appearance.indicator_color,
                1.0,
            );
        }

        if control.overlays.is_attached(OverlayKind::Arrow)
            && appearance.indicator_edge != IndicatorEdge::None
        {
            self.draw_arrow(control);
        }

        // Restore state (clear clipping)
        self.canvas.restore();
    }

    fn fill_rect(&mut self, rect: crate::geometry::Rect, color: Color, opacity: f32) {
        let mut path = Path::new();
        path.rect(rect.x, rect.y, rect.width, rect.height);
        self.canvas
            .fill_path(&path, &Paint::color(paint_color(color, opacity)));
    }

    fn draw_label(&mut self, text: &str, rect: crate::geometry::Rect, style: crate::style::TextStyle) {
        let mut text_paint = Paint::color(paint_color(style.color, 1.0));
        text_paint.set_font(self.fonts);
        text_paint.set_font_size(style.font_size);

        // Measure to center within the label rect
        let text_width = if let Ok(metrics) = self.canvas.measure_text(0.0, 0.0, text, &text_paint)
        {
            metrics.width()
        } else {
            0.0
        };

        let text_x = snap_to_pixel(rect.x + (rect.width - text_width) / 2.0);
        let text_y = snap_to_pixel(rect.y + rect.height / 2.0 + style.font_size * 0.35);
        let _ = self.canvas.fill_text(text_x, text_y, text, &text_paint);
    }

    fn draw_arrow(&mut self, control: &SegmentedControl) {
        let frame = control.overlays.frame(OverlayKind::Arrow);
        let points = control.arrow_triangle();

        let mut path = Path::new();
        path.move_to(frame.x + points[0].0, frame.y + points[0].1);
        path.line_to(frame.x + points[1].0, frame.y + points[1].1);
        path.line_to(frame.x + points[2].0, frame.y + points[2].1);
        path.close();

        self.canvas.fill_path(
            &path,
            &Paint::color(paint_color(control.appearance().indicator_color, 1.0)),
        );
    }
}
