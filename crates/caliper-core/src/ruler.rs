//! Picture ruler: a pan/zoomable picture on which a drag measures a
//! straight-line distance and a corner drag resizes the picture.

use crate::camera::Camera;
use crate::input::{MouseButton, PointerEvent};
use kurbo::{Point, Size};

/// Minimum picture size on each axis, in display pixels.
pub const MIN_PICTURE_SIZE: f64 = 50.0;

/// Side length of the bottom-right resize grip, in picture coordinates.
pub const RESIZE_GRIP: f64 = 20.0;

/// Gesture state of the picture ruler.
#[derive(Debug, Clone, Default)]
pub enum RulerGesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging to measure a distance, in picture coordinates.
    Measuring {
        /// Point recorded at gesture start.
        anchor: Point,
        /// Current pointer position, updated live.
        current: Point,
    },
    /// Dragging the corner grip to resize the picture.
    Resizing,
}

/// State of the picture ruler widget.
#[derive(Debug, Clone)]
pub struct PictureRuler {
    /// Zoom transform between display and picture coordinates.
    pub camera: Camera,
    /// Picture size at 100% zoom.
    base_size: Size,
    /// Current display size of the picture.
    pub size: Size,
    /// Gesture in progress.
    gesture: RulerGesture,
    /// Most recently measured distance, in picture coordinates.
    pub distance: f64,
}

impl PictureRuler {
    /// Create a ruler for a picture of the given base size.
    pub fn new(base_size: Size) -> Self {
        Self {
            camera: Camera::new(),
            base_size,
            size: base_size,
            gesture: RulerGesture::default(),
            distance: 0.0,
        }
    }

    /// The picture size in picture coordinates (display size unscaled by zoom).
    pub fn world_size(&self) -> Size {
        Size::new(
            self.size.width / self.camera.zoom,
            self.size.height / self.camera.zoom,
        )
    }

    /// Check if a measuring drag is in progress.
    pub fn is_measuring(&self) -> bool {
        matches!(self.gesture, RulerGesture::Measuring { .. })
    }

    /// Check if a resize drag is in progress.
    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, RulerGesture::Resizing)
    }

    /// The live measuring line in picture coordinates, if a drag is active.
    pub fn measuring_line(&self) -> Option<(Point, Point)> {
        match self.gesture {
            RulerGesture::Measuring { anchor, current } => Some((anchor, current)),
            _ => None,
        }
    }

    /// The current pointer position in picture coordinates while measuring.
    pub fn pointer_position(&self) -> Option<Point> {
        self.measuring_line().map(|(_, current)| current)
    }

    /// Zoom in one step and rescale the picture from its base size.
    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
        self.size = self.scaled_base();
    }

    /// Zoom out one step and rescale the picture from its base size.
    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
        self.size = self.scaled_base();
    }

    fn scaled_base(&self) -> Size {
        Size::new(
            self.base_size.width * self.camera.zoom,
            self.base_size.height * self.camera.zoom,
        )
    }

    /// Dispatch a pointer event with positions in display coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                if button != MouseButton::Left {
                    return;
                }
                let world = self.camera.screen_to_world(position);
                let ws = self.world_size();
                if world.x > ws.width - RESIZE_GRIP && world.y > ws.height - RESIZE_GRIP {
                    self.gesture = RulerGesture::Resizing;
                } else {
                    self.gesture = RulerGesture::Measuring {
                        anchor: world,
                        current: world,
                    };
                }
                self.distance = 0.0;
            }
            PointerEvent::Move { position } => {
                let world = self.camera.screen_to_world(position);
                match &mut self.gesture {
                    RulerGesture::Measuring { anchor, current } => {
                        *current = world;
                        self.distance = anchor.distance(world);
                    }
                    RulerGesture::Resizing => {
                        self.size = Size::new(
                            (world.x * self.camera.zoom).max(MIN_PICTURE_SIZE),
                            (world.y * self.camera.zoom).max(MIN_PICTURE_SIZE),
                        );
                    }
                    RulerGesture::Idle => {}
                }
            }
            PointerEvent::Up { position, button } => {
                if button != MouseButton::Left {
                    return;
                }
                if let RulerGesture::Measuring { anchor, .. } = self.gesture {
                    let world = self.camera.screen_to_world(position);
                    self.distance = anchor.distance(world);
                }
                self.gesture = RulerGesture::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruler() -> PictureRuler {
        PictureRuler::new(Size::new(400.0, 300.0))
    }

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

    #[test]
    fn test_measure_drag_distance() {
        let mut ruler = ruler();
        ruler.handle_pointer(down(10.0, 10.0));
        assert!(ruler.is_measuring());
        assert!(ruler.distance.abs() < f64::EPSILON);

        ruler.handle_pointer(moved(13.0, 14.0));
        assert!((ruler.distance - 5.0).abs() < f64::EPSILON);

        ruler.handle_pointer(up(13.0, 14.0));
        assert!(!ruler.is_measuring());
        assert!((ruler.distance - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_distance_is_zoom_independent() {
        let mut ruler = ruler();
        ruler.zoom_in(); // 1.1
        ruler.zoom_in(); // 1.2, within the 400x300 picture

        ruler.handle_pointer(down(0.0, 0.0));
        ruler.handle_pointer(moved(3.6, 4.8));
        // Screen (3.6, 4.8) at zoom 1.2 is picture (3, 4).
        assert!((ruler.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_buttons_rescale_from_base() {
        let mut ruler = ruler();
        ruler.zoom_in();
        assert!((ruler.size.width - 440.0).abs() < 1e-9);
        assert!((ruler.size.height - 330.0).abs() < 1e-9);

        ruler.zoom_out();
        assert!((ruler.size.width - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_drag_resizes() {
        let mut ruler = ruler();
        // Bottom-right grip: inside the 20px corner of the 400x300 picture.
        ruler.handle_pointer(down(395.0, 295.0));
        assert!(ruler.is_resizing());

        ruler.handle_pointer(moved(500.0, 350.0));
        assert!((ruler.size.width - 500.0).abs() < f64::EPSILON);
        assert!((ruler.size.height - 350.0).abs() < f64::EPSILON);

        ruler.handle_pointer(up(500.0, 350.0));
        assert!(!ruler.is_resizing());
        // A resize drag measures nothing.
        assert!(ruler.distance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut ruler = ruler();
        ruler.handle_pointer(down(395.0, 295.0));
        ruler.handle_pointer(moved(5.0, 5.0));
        assert!((ruler.size.width - MIN_PICTURE_SIZE).abs() < f64::EPSILON);
        assert!((ruler.size.height - MIN_PICTURE_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_while_idle_has_no_effect() {
        let mut ruler = ruler();
        ruler.handle_pointer(moved(100.0, 100.0));
        assert!(ruler.distance.abs() < f64::EPSILON);
        assert!(ruler.pointer_position().is_none());
    }
}
