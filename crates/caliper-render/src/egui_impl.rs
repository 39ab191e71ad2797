//! egui painter implementation of the drawing surface contract.

use crate::renderer::PaintSurface;
use egui::{Color32, Painter, Pos2, Stroke, StrokeKind};
use kurbo::{Point, Rect};
use peniko::Color;

/// A [`PaintSurface`] backed by an [`egui::Painter`] clipped to one widget.
///
/// Local coordinates are translated by the widget's on-screen origin, so the
/// paint procedures never see screen coordinates.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    /// Create a surface for a widget whose top-left corner is at `origin`.
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32,
            self.origin.y + point.y as f32,
        )
    }

    fn to_screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.to_screen(Point::new(rect.x0, rect.y0)),
            self.to_screen(Point::new(rect.x1, rect.y1)),
        )
    }
}

fn color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

impl PaintSurface for PainterSurface<'_> {
    fn clear(&mut self, region: Rect, color: Color) {
        self.painter
            .rect_filled(self.to_screen_rect(region), 0.0, color32(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter
            .rect_filled(self.to_screen_rect(rect), 0.0, color32(color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.painter.rect_stroke(
            self.to_screen_rect(rect),
            0.0,
            Stroke::new(width as f32, color32(color)),
            StrokeKind::Middle,
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius as f32, color32(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius as f32,
            Stroke::new(width as f32, color32(color)),
        );
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width as f32, color32(color)),
        );
    }
}
