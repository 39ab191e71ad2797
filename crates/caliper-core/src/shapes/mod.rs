//! Shape definitions for the measuring canvases.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    /// The translucent fill used for captured shapes (blue at 0.3 alpha).
    pub fn translucent_blue() -> Self {
        Self::new(0, 0, 255, 77)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Set the stroke color from a peniko Color.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke_color = color.into();
    }

    /// Set the fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill_color = color.map(|c| c.into());
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::blue(),
            stroke_width: 2.0,
            fill_color: Some(SerializableColor::translucent_blue()),
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// The kind of shape a canvas captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Display name used in measurement labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// Geometry capability shared by all capturable shapes.
///
/// A drag gesture creates a shape at its anchor with zero extent, then
/// re-derives the extent from (anchor, pointer) on every move.
pub trait ShapeGeometry {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Create a zero-extent shape anchored at the gesture start point.
    fn at_anchor(anchor: Point) -> Self
    where
        Self: Sized;

    /// Recompute the extent as a pure function of anchor and pointer position.
    fn set_extent(&mut self, anchor: Point, position: Point);

    /// Get the bounding box (normalized, for drawing).
    fn bounds(&self) -> Rect;

    /// The point used for inter-shape distance measurement.
    fn center(&self) -> Point;

    /// Human-readable size, e.g. "100 x 50" or "5".
    fn size_label(&self) -> String;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper over the shape types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Create a zero-extent shape of the given kind at the anchor point.
    pub fn at_anchor(kind: ShapeKind, anchor: Point) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::at_anchor(anchor)),
            ShapeKind::Circle => Shape::Circle(Circle::at_anchor(anchor)),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn set_extent(&mut self, anchor: Point, position: Point) {
        match self {
            Shape::Rectangle(s) => s.set_extent(anchor, position),
            Shape::Circle(s) => s.set_extent(anchor, position),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Circle(s) => s.center(),
        }
    }

    pub fn size_label(&self) -> String {
        match self {
            Shape::Rectangle(s) => s.size_label(),
            Shape::Circle(s) => s.size_label(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
        }
    }
}
