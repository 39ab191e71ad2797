//! Renderer abstraction.
//!
//! The core consumes a 2D drawing surface; it never implements one. A paint
//! pass clears the whole surface and then strokes and fills each shape in
//! list order, so order matters only for visual overlap.

use caliper_core::board::ShapeBoard;
use caliper_core::ruler::{PictureRuler, RESIZE_GRIP};
use caliper_core::shapes::Shape;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
#[allow(dead_code)]
pub type RenderResult<T> = Result<T, RendererError>;

/// The 2D drawing surface contract consumed by the paint procedures.
///
/// Coordinates are in the widget's local space, origin at the top-left.
pub trait PaintSurface {
    /// Clear a region to a solid color.
    fn clear(&mut self, region: Rect, color: Color);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);

    /// Stroke a line segment.
    fn line(&mut self, from: Point, to: Point, color: Color, width: f64);
}

/// Context for painting one shape board.
pub struct RenderContext<'a> {
    /// The board to paint.
    pub board: &'a ShapeBoard,
    /// Viewport size in local pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(board: &'a ShapeBoard, viewport_size: Size) -> Self {
        Self {
            board,
            viewport_size,
            background_color: Color::WHITE,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Context for painting the picture ruler.
pub struct PictureContext<'a> {
    /// The ruler to paint.
    pub ruler: &'a PictureRuler,
    /// Viewport size in local pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Color of the live measuring line.
    pub line_color: Color,
}

impl<'a> PictureContext<'a> {
    /// Create a new picture context.
    pub fn new(ruler: &'a PictureRuler, viewport_size: Size) -> Self {
        Self {
            ruler,
            viewport_size,
            background_color: Color::WHITE,
            line_color: Color::BLACK,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the measuring line color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }
}

fn paint_shape(surface: &mut dyn PaintSurface, shape: &Shape) {
    let style = shape.style();
    match shape {
        Shape::Rectangle(rect) => {
            surface.stroke_rect(rect.as_rect(), style.stroke(), style.stroke_width);
            if let Some(fill) = style.fill() {
                surface.fill_rect(rect.as_rect(), fill);
            }
        }
        Shape::Circle(circle) => {
            surface.stroke_circle(
                circle.center,
                circle.radius,
                style.stroke(),
                style.stroke_width,
            );
            if let Some(fill) = style.fill() {
                surface.fill_circle(circle.center, circle.radius, fill);
            }
        }
    }
}

/// Paint a shape board: clear the surface, then stroke and fill every
/// visible shape (finalized plus the provisional one during a drag) in order.
pub fn paint_board(surface: &mut dyn PaintSurface, ctx: &RenderContext) {
    surface.clear(ctx.viewport_size.to_rect(), ctx.background_color);
    for shape in ctx.board.visible_shapes() {
        paint_shape(surface, shape);
    }
}

/// Paint the picture ruler: a placeholder picture scaled to the current
/// display size, the corner resize grip, and the live measuring line.
pub fn paint_picture(surface: &mut dyn PaintSurface, ctx: &PictureContext) {
    surface.clear(ctx.viewport_size.to_rect(), ctx.background_color);

    let ruler = ctx.ruler;
    let picture = ruler.size.to_rect();

    // Placeholder scene standing in for the photograph: sky, ground, sun.
    surface.fill_rect(picture, Color::from_rgba8(173, 216, 230, 255));
    let ground = Rect::new(
        picture.x0,
        picture.y0 + picture.height() * 2.0 / 3.0,
        picture.x1,
        picture.y1,
    );
    surface.fill_rect(ground, Color::from_rgba8(144, 190, 109, 255));
    surface.fill_circle(
        Point::new(
            picture.x0 + picture.width() * 0.75,
            picture.y0 + picture.height() * 0.25,
        ),
        picture.width().min(picture.height()) * 0.1,
        Color::from_rgba8(255, 215, 64, 255),
    );
    surface.stroke_rect(picture, Color::from_rgba8(204, 204, 204, 255), 1.0);

    // Resize grip in the bottom-right corner, matching the hit area.
    let grip = RESIZE_GRIP * ruler.camera.zoom;
    surface.fill_rect(
        Rect::new(picture.x1 - grip, picture.y1 - grip, picture.x1, picture.y1),
        Color::from_rgba8(0, 0, 0, 26),
    );

    if let Some((anchor, current)) = ruler.measuring_line() {
        surface.line(
            ruler.camera.world_to_screen(anchor),
            ruler.camera.world_to_screen(current),
            ctx.line_color,
            2.0,
        );
    }
}
