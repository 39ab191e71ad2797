//! Rectangle shape.

use super::{ShapeGeometry, ShapeId, ShapeStyle};
use crate::measure::format_length;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle captured by dragging from one corner to the opposite one.
///
/// `width` and `height` are signed deltas from the anchor: dragging up or left
/// of the anchor leaves them negative. They are normalized only for display and
/// for producing a drawable rect, never on the stored shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corner recorded at gesture start.
    pub anchor: Point,
    /// Signed horizontal extent from the anchor.
    pub width: f64,
    /// Signed vertical extent from the anchor.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle with signed extents.
    pub fn new(anchor: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// Get the drawable rect (normalized regardless of drag direction).
    pub fn as_rect(&self) -> Rect {
        let far = Point::new(self.anchor.x + self.width, self.anchor.y + self.height);
        Rect::new(
            self.anchor.x.min(far.x),
            self.anchor.y.min(far.y),
            self.anchor.x.max(far.x),
            self.anchor.y.max(far.y),
        )
    }
}

impl ShapeGeometry for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn at_anchor(anchor: Point) -> Self {
        Self::new(anchor, 0.0, 0.0)
    }

    fn set_extent(&mut self, anchor: Point, position: Point) {
        self.width = position.x - anchor.x;
        self.height = position.y - anchor.y;
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn center(&self) -> Point {
        // Signed extents: the center lands on whichever side was dragged to.
        Point::new(
            self.anchor.x + self.width / 2.0,
            self.anchor.y + self.height / 2.0,
        )
    }

    fn size_label(&self) -> String {
        format!(
            "{} x {}",
            format_length(self.width.abs()),
            format_length(self.height.abs())
        )
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_anchor_has_zero_extent() {
        let rect = Rectangle::at_anchor(Point::new(10.0, 10.0));
        assert!((rect.width).abs() < f64::EPSILON);
        assert!((rect.height).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_extent_is_signed() {
        let anchor = Point::new(100.0, 100.0);
        let mut rect = Rectangle::at_anchor(anchor);
        rect.set_extent(anchor, Point::new(50.0, 40.0));
        assert!((rect.width - -50.0).abs() < f64::EPSILON);
        assert!((rect.height - -60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_as_rect_normalizes() {
        let anchor = Point::new(100.0, 100.0);
        let mut rect = Rectangle::at_anchor(anchor);
        rect.set_extent(anchor, Point::new(50.0, 40.0));
        let r = rect.as_rect();
        assert!((r.x0 - 50.0).abs() < f64::EPSILON);
        assert!((r.y0 - 40.0).abs() < f64::EPSILON);
        assert!((r.x1 - 100.0).abs() < f64::EPSILON);
        assert!((r.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_uses_signed_extents() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), -50.0, -60.0);
        let center = rect.center();
        assert!((center.x - 75.0).abs() < f64::EPSILON);
        assert!((center.y - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_size_label_absolute() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), -50.0, -60.0);
        assert_eq!(rect.size_label(), "50 x 60");
    }
}
