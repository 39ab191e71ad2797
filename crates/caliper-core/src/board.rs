//! Per-widget shape board: the finalized shape list plus its capture state.

use crate::capture::ShapeCapture;
use crate::input::{MouseButton, PointerEvent};
use crate::measure::Measurements;
use crate::shapes::{Shape, ShapeKind};

/// Maximum number of finalized shapes per board.
pub const MAX_SHAPES: usize = 2;

/// One board per canvas widget. Owns its shape list, capture state, and
/// nothing else; no state crosses widget instances.
#[derive(Debug, Clone)]
pub struct ShapeBoard {
    /// Kind of shape this board captures.
    kind: ShapeKind,
    /// Finalized shapes, at most [`MAX_SHAPES`].
    shapes: Vec<Shape>,
    /// Capture controller for the gesture in progress.
    capture: ShapeCapture,
}

impl ShapeBoard {
    /// Create an empty board for the given shape kind.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            shapes: Vec::with_capacity(MAX_SHAPES),
            capture: ShapeCapture::new(kind),
        }
    }

    /// Kind of shape this board captures.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The finalized shapes, in capture order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a finalized shape by slot index.
    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Number of finalized shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the board has no finalized shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Check if a capture gesture is in progress.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_active()
    }

    /// The provisional shape of the gesture in progress, if any.
    pub fn provisional(&self) -> Option<&Shape> {
        self.capture.preview()
    }

    /// Finalized shapes plus the provisional shape while a drag is in
    /// progress, in draw order. Order matters only for visual overlap.
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().chain(self.capture.preview())
    }

    /// Dispatch a pointer event. All guards are silent no-ops: a third
    /// gesture after the cap is reached records nothing, and moves or
    /// releases outside an active gesture have no effect.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                if button != MouseButton::Left {
                    return;
                }
                if self.shapes.len() >= MAX_SHAPES {
                    log::debug!("{:?} board full, ignoring pointer down", self.kind);
                    return;
                }
                self.capture.begin(position);
            }
            PointerEvent::Move { position } => {
                self.capture.update(position);
            }
            PointerEvent::Up { button, .. } => {
                if button != MouseButton::Left {
                    return;
                }
                if let Some(shape) = self.capture.finish() {
                    self.shapes.push(shape);
                }
            }
        }
    }

    /// Empty the board and cancel any in-progress capture. Always safe;
    /// idempotent when already idle and empty.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.capture.cancel();
    }

    /// Derive the measurement panel contents for the current shapes.
    pub fn measurements(&self) -> Measurements {
        Measurements::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn drag(board: &mut ShapeBoard, from: (f64, f64), to: (f64, f64)) {
        board.handle_pointer(down(from.0, from.1));
        board.handle_pointer(moved(to.0, to.1));
        board.handle_pointer(up(to.0, to.1));
    }

    #[test]
    fn test_drag_captures_rectangle() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        drag(&mut board, (10.0, 10.0), (110.0, 60.0));

        assert_eq!(board.len(), 1);
        match board.shape(0).unwrap() {
            Shape::Rectangle(rect) => {
                assert!((rect.anchor.x - 10.0).abs() < f64::EPSILON);
                assert!((rect.anchor.y - 10.0).abs() < f64::EPSILON);
                assert!((rect.width - 100.0).abs() < f64::EPSILON);
                assert!((rect.height - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("rectangle board captured a non-rectangle"),
        }
        assert_eq!(board.measurements().slots[0], "Rectangle 1: 100 x 50");
    }

    #[test]
    fn test_reverse_drag_keeps_signed_extents() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        drag(&mut board, (100.0, 100.0), (50.0, 40.0));

        match board.shape(0).unwrap() {
            Shape::Rectangle(rect) => {
                assert!((rect.width - -50.0).abs() < f64::EPSILON);
                assert!((rect.height - -60.0).abs() < f64::EPSILON);
            }
            _ => panic!("rectangle board captured a non-rectangle"),
        }
        assert_eq!(board.measurements().slots[0], "Rectangle 1: 50 x 60");
    }

    #[test]
    fn test_drag_captures_circle() {
        let mut board = ShapeBoard::new(ShapeKind::Circle);
        drag(&mut board, (0.0, 0.0), (3.0, 4.0));

        match board.shape(0).unwrap() {
            Shape::Circle(circle) => assert!((circle.radius - 5.0).abs() < f64::EPSILON),
            _ => panic!("circle board captured a non-circle"),
        }
        assert_eq!(board.measurements().slots[0], "Circle 1: 5");
    }

    #[test]
    fn test_two_circle_distance() {
        let mut board = ShapeBoard::new(ShapeKind::Circle);
        drag(&mut board, (0.0, 0.0), (3.0, 4.0));
        drag(&mut board, (10.0, 0.0), (12.0, 0.0));

        let m = board.measurements();
        assert!((m.distance - 10.0).abs() < f64::EPSILON);
        assert_eq!(m.distance_label(), "10");
    }

    #[test]
    fn test_third_gesture_is_ignored_entirely() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        drag(&mut board, (0.0, 0.0), (10.0, 10.0));
        drag(&mut board, (20.0, 20.0), (30.0, 30.0));
        assert_eq!(board.len(), 2);

        board.handle_pointer(down(40.0, 40.0));
        // No provisional shape, no anchor recorded.
        assert!(!board.is_capturing());
        assert!(board.provisional().is_none());

        board.handle_pointer(moved(50.0, 50.0));
        board.handle_pointer(up(50.0, 50.0));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_move_outside_gesture_has_no_effect() {
        let mut board = ShapeBoard::new(ShapeKind::Circle);
        board.handle_pointer(moved(30.0, 30.0));
        board.handle_pointer(up(30.0, 30.0));
        assert!(board.is_empty());
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_visible_shapes_include_provisional() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        drag(&mut board, (0.0, 0.0), (10.0, 10.0));

        board.handle_pointer(down(20.0, 20.0));
        board.handle_pointer(moved(40.0, 40.0));
        assert_eq!(board.len(), 1);
        assert_eq!(board.visible_shapes().count(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = ShapeBoard::new(ShapeKind::Circle);
        drag(&mut board, (0.0, 0.0), (3.0, 4.0));
        board.handle_pointer(down(10.0, 10.0));
        board.handle_pointer(moved(20.0, 20.0));

        board.clear();
        assert!(board.is_empty());
        assert!(!board.is_capturing());
        // Abandoned gestures are discarded, not committed.
        board.handle_pointer(up(20.0, 20.0));
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        board.clear();
        board.clear();
        assert!(board.is_empty());
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        board.handle_pointer(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Right,
        });
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_click_without_move_captures_zero_extent() {
        let mut board = ShapeBoard::new(ShapeKind::Rectangle);
        board.handle_pointer(down(25.0, 25.0));
        board.handle_pointer(up(25.0, 25.0));

        assert_eq!(board.len(), 1);
        match board.shape(0).unwrap() {
            Shape::Rectangle(rect) => {
                assert!(rect.width.abs() < f64::EPSILON);
                assert!(rect.height.abs() < f64::EPSILON);
            }
            _ => panic!("rectangle board captured a non-rectangle"),
        }
    }
}
