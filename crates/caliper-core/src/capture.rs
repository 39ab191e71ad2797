//! Pointer-capture state machine for drag-to-draw gestures.

use crate::shapes::{Shape, ShapeKind, ShapeStyle};
use kurbo::Point;

/// State of a capture gesture.
///
/// The provisional shape lives inside `Active`, so a capture without an anchor
/// or an orphaned provisional shape cannot be represented.
#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pointer-down-to-pointer-up gesture is in progress.
    Active {
        /// Point recorded at gesture start.
        anchor: Point,
        /// The not-yet-committed shape, updated live during the drag.
        provisional: Shape,
    },
}

/// One capture controller drives both widget kinds, parameterized by the
/// shape geometry it produces.
#[derive(Debug, Clone)]
pub struct ShapeCapture {
    /// Kind of shape this controller captures.
    kind: ShapeKind,
    /// Current gesture state.
    state: CaptureState,
    /// Style applied to new shapes.
    pub style: ShapeStyle,
}

impl ShapeCapture {
    /// Create a new capture controller for the given shape kind.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            state: CaptureState::default(),
            style: ShapeStyle::default(),
        }
    }

    /// Kind of shape this controller captures.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Begin a gesture: record the anchor and create a zero-extent
    /// provisional shape. No-op if a gesture is already in progress.
    pub fn begin(&mut self, point: Point) {
        if self.is_active() {
            return;
        }
        let mut provisional = Shape::at_anchor(self.kind, point);
        *provisional.style_mut() = self.style.clone();
        self.state = CaptureState::Active {
            anchor: point,
            provisional,
        };
    }

    /// Update the provisional shape's extent from the anchor to the current
    /// pointer position. No-op unless a gesture is in progress.
    pub fn update(&mut self, point: Point) {
        if let CaptureState::Active {
            anchor,
            provisional,
        } = &mut self.state
        {
            provisional.set_extent(*anchor, point);
        }
    }

    /// End the gesture and return the captured shape as-is.
    /// No-op (returns None) unless a gesture is in progress.
    pub fn finish(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            CaptureState::Active { provisional, .. } => Some(provisional),
            CaptureState::Idle => None,
        }
    }

    /// Abandon the gesture, discarding the provisional shape.
    pub fn cancel(&mut self) {
        self.state = CaptureState::Idle;
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, CaptureState::Active { .. })
    }

    /// The anchor of the gesture in progress, if any.
    pub fn anchor(&self) -> Option<Point> {
        match &self.state {
            CaptureState::Active { anchor, .. } => Some(*anchor),
            CaptureState::Idle => None,
        }
    }

    /// The provisional shape for the gesture in progress, if any.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.state {
            CaptureState::Active { provisional, .. } => Some(provisional),
            CaptureState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lifecycle() {
        let mut capture = ShapeCapture::new(ShapeKind::Rectangle);
        assert!(!capture.is_active());

        capture.begin(Point::new(10.0, 10.0));
        assert!(capture.is_active());
        assert_eq!(capture.anchor(), Some(Point::new(10.0, 10.0)));

        capture.update(Point::new(110.0, 60.0));
        let preview = capture.preview().expect("provisional shape during drag");
        match preview {
            Shape::Rectangle(rect) => {
                assert!((rect.width - 100.0).abs() < f64::EPSILON);
                assert!((rect.height - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("rectangle controller produced a non-rectangle"),
        }

        let shape = capture.finish().expect("finished gesture yields a shape");
        assert!(!capture.is_active());
        assert!(capture.preview().is_none());
        match shape {
            Shape::Rectangle(rect) => {
                assert!((rect.anchor.x - 10.0).abs() < f64::EPSILON);
                assert!((rect.anchor.y - 10.0).abs() < f64::EPSILON);
                assert!((rect.width - 100.0).abs() < f64::EPSILON);
                assert!((rect.height - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("rectangle controller produced a non-rectangle"),
        }
    }

    #[test]
    fn test_begin_creates_zero_extent_provisional() {
        let mut capture = ShapeCapture::new(ShapeKind::Circle);
        capture.begin(Point::new(0.0, 0.0));
        match capture.preview() {
            Some(Shape::Circle(circle)) => assert!(circle.radius.abs() < f64::EPSILON),
            _ => panic!("expected a provisional circle"),
        }
    }

    #[test]
    fn test_finish_without_gesture_is_noop() {
        let mut capture = ShapeCapture::new(ShapeKind::Rectangle);
        assert!(capture.finish().is_none());
    }

    #[test]
    fn test_update_without_gesture_is_noop() {
        let mut capture = ShapeCapture::new(ShapeKind::Rectangle);
        capture.update(Point::new(50.0, 50.0));
        assert!(!capture.is_active());
        assert!(capture.preview().is_none());
    }

    #[test]
    fn test_cancel_discards_provisional() {
        let mut capture = ShapeCapture::new(ShapeKind::Circle);
        capture.begin(Point::new(0.0, 0.0));
        capture.update(Point::new(3.0, 4.0));
        capture.cancel();
        assert!(!capture.is_active());
        assert!(capture.finish().is_none());
    }

    #[test]
    fn test_finish_ignores_release_position() {
        // The shape commits as last updated; pointer-up carries no position.
        let mut capture = ShapeCapture::new(ShapeKind::Circle);
        capture.begin(Point::new(0.0, 0.0));
        capture.update(Point::new(3.0, 4.0));
        let shape = capture.finish().unwrap();
        match shape {
            Shape::Circle(circle) => assert!((circle.radius - 5.0).abs() < f64::EPSILON),
            _ => panic!("expected a circle"),
        }
    }

    #[test]
    fn test_provisional_carries_controller_style() {
        let mut capture = ShapeCapture::new(ShapeKind::Rectangle);
        capture.style.stroke_width = 4.0;
        capture.begin(Point::new(0.0, 0.0));
        let preview = capture.preview().unwrap();
        assert!((preview.style().stroke_width - 4.0).abs() < f64::EPSILON);
    }
}
