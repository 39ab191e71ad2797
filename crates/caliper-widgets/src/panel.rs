//! Panel components: frames and metric readout rows.

use egui::{Color32, CornerRadius, Frame, Margin, Pos2, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// Create a standard panel frame with shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}

/// Show one measurement row: a muted name on the left, a monospace value on
/// the right.
pub fn metric_row(ui: &mut Ui, name: &str, value: &str) {
    let size = vec2(ui.available_width(), 20.0);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().text(
            Pos2::new(rect.left() + 4.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            name,
            egui::FontId::proportional(12.0),
            theme::TEXT_MUTED,
        );
        ui.painter().text(
            Pos2::new(rect.right() - 4.0, rect.center().y),
            egui::Align2::RIGHT_CENTER,
            value,
            egui::FontId::monospace(12.0),
            theme::TEXT,
        );
    }
}
