//! Canvas widgets: allocate a paint region, translate egui pointer state
//! into core pointer events with widget-local coordinates, and repaint.

use caliper_core::board::ShapeBoard;
use caliper_core::input::{MouseButton, PointerEvent};
use caliper_core::ruler::PictureRuler;
use caliper_render::{
    PainterSurface, PictureContext, RenderContext, paint_board, paint_picture,
};
use caliper_widgets::theme;
use egui::{PointerButton, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2};
use kurbo::{Point, Size};

/// Convert a screen position into the widget's local coordinate space.
fn local_position(pos: Pos2, origin: Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

/// Translate the response's primary-button drag state into pointer events.
fn pointer_events(response: &Response) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let Some(pos) = response.interact_pointer_pos() else {
        return events;
    };
    let position = local_position(pos, response.rect.min);

    if response.drag_started_by(PointerButton::Primary) {
        events.push(PointerEvent::Down {
            position,
            button: MouseButton::Left,
        });
    } else if response.dragged_by(PointerButton::Primary) {
        events.push(PointerEvent::Move { position });
    }
    if response.drag_stopped_by(PointerButton::Primary) {
        events.push(PointerEvent::Up {
            position,
            button: MouseButton::Left,
        });
    }
    events
}

fn draw_border(ui: &Ui, response: &Response) {
    ui.painter().rect_stroke(
        response.rect,
        0.0,
        Stroke::new(1.0, theme::BORDER),
        StrokeKind::Inside,
    );
}

/// Show a shape board canvas of the given size.
pub fn board_canvas(ui: &mut Ui, board: &mut ShapeBoard, size: Vec2) -> Response {
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());

    for event in pointer_events(&response) {
        board.handle_pointer(event);
    }

    let mut surface = PainterSurface::new(&painter, response.rect.min);
    let ctx = RenderContext::new(board, Size::new(size.x as f64, size.y as f64));
    paint_board(&mut surface, &ctx);
    draw_border(ui, &response);

    response
}

/// Show the picture ruler canvas of the given viewport size.
pub fn ruler_canvas(ui: &mut Ui, ruler: &mut PictureRuler, size: Vec2) -> Response {
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());

    for event in pointer_events(&response) {
        ruler.handle_pointer(event);
    }

    let mut surface = PainterSurface::new(&painter, response.rect.min);
    let ctx = PictureContext::new(ruler, Size::new(size.x as f64, size.y as f64));
    paint_picture(&mut surface, &ctx);
    draw_border(ui, &response);

    response
}
