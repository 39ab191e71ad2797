//! Circle shape.

use super::{ShapeGeometry, ShapeId, ShapeStyle};
use crate::measure::format_length;
use kurbo::{Circle as KurboCircle, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle captured by dragging outward from its center.
///
/// The anchor is the center; the radius is the distance from the anchor to the
/// pointer, so it is always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point (the gesture anchor).
    pub center: Point,
    /// Radius, always >= 0.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            style: ShapeStyle::default(),
        }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeGeometry for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn at_anchor(anchor: Point) -> Self {
        Self::new(anchor, 0.0)
    }

    fn set_extent(&mut self, anchor: Point, position: Point) {
        self.radius = anchor.distance(position);
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn center(&self) -> Point {
        self.center
    }

    fn size_label(&self) -> String {
        format_length(self.radius)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
