//! The application state and layout shell.

use crate::canvas_widget::{board_canvas, ruler_canvas};
use caliper_core::board::ShapeBoard;
use caliper_core::ruler::PictureRuler;
use caliper_core::shapes::ShapeKind;
use caliper_widgets::{
    TextButton, metric_row, panel_frame, section_label, separator, vertical_separator,
};
use egui::Vec2;
use kurbo::Size;

/// Canvas size for the shape boards, in points.
const BOARD_CANVAS_SIZE: Vec2 = Vec2::new(420.0, 300.0);

/// Picture size of the ruler at 100% zoom.
const PICTURE_BASE_SIZE: Size = Size::new(400.0, 280.0);

/// Viewport of the ruler canvas (fixed while the picture scales inside it).
const RULER_CANVAS_SIZE: Vec2 = Vec2::new(440.0, 300.0);

/// The Caliper application: two shape boards and the picture ruler, each
/// owning its state exclusively.
pub struct CaliperApp {
    rectangles: ShapeBoard,
    circles: ShapeBoard,
    ruler: PictureRuler,
}

impl Default for CaliperApp {
    fn default() -> Self {
        Self {
            rectangles: ShapeBoard::new(ShapeKind::Rectangle),
            circles: ShapeBoard::new(ShapeKind::Circle),
            ruler: PictureRuler::new(PICTURE_BASE_SIZE),
        }
    }
}

impl CaliperApp {
    fn board_panel(ui: &mut egui::Ui, title: &str, board: &mut ShapeBoard) {
        panel_frame().show(ui, |ui| {
            section_label(ui, title);
            board_canvas(ui, board, BOARD_CANVAS_SIZE);

            ui.add_space(2.0);
            separator(ui);
            let measurements = board.measurements();
            for slot in &measurements.slots {
                ui.label(egui::RichText::new(slot.as_str()).size(12.0));
            }
            metric_row(ui, "Distance", &measurements.distance_label());

            ui.add_space(4.0);
            if TextButton::new("Clear Canvas").show(ui) {
                log::debug!("clearing {:?} board", board.kind());
                board.clear();
            }
        });
    }

    fn ruler_panel(ui: &mut egui::Ui, ruler: &mut PictureRuler) {
        panel_frame().show(ui, |ui| {
            section_label(ui, "Picture ruler");

            ui.horizontal(|ui| {
                if TextButton::new("Zoom In (+)").show(ui) {
                    ruler.zoom_in();
                }
                if TextButton::new("Zoom Out (-)").show(ui) {
                    ruler.zoom_out();
                }
                vertical_separator(ui);
                ui.label(format!("Zoom: {}%", (ruler.camera.zoom * 100.0).round()));
            });

            ruler_canvas(ui, ruler, RULER_CANVAS_SIZE);

            ui.add_space(6.0);
            let position = match ruler.pointer_position() {
                Some(p) => format!("({}, {})", p.x.round(), p.y.round()),
                None => "Not dragging".to_string(),
            };
            metric_row(ui, "Position", &position);
            metric_row(ui, "Distance", &format!("{}px", ruler.distance.round()));
            metric_row(
                ui,
                "Dimensions",
                &format!("{}x{}", ruler.size.width.round(), ruler.size.height.round()),
            );
        });
    }
}

impl eframe::App for CaliperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Caliper");
            ui.add_space(8.0);

            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        Self::board_panel(ui, "Rectangles", &mut self.rectangles);
                    });
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        Self::board_panel(ui, "Circles", &mut self.circles);
                    });
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        Self::ruler_panel(ui, &mut self.ruler);
                    });
                });
            });
        });
    }
}
