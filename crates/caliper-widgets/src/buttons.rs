//! Button components.

use egui::{Color32, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// A bordered text button.
pub struct TextButton<'a> {
    label: &'a str,
    min_width: f32,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            min_width: 0.0,
        }
    }

    /// Set a minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let text_width = ui
            .painter()
            .layout_no_wrap(
                self.label.to_string(),
                egui::FontId::proportional(12.0),
                theme::TEXT,
            )
            .size()
            .x;
        let size = vec2(
            (text_width + 16.0).max(self.min_width),
            sizing::BUTTON_HEIGHT,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::WHITE
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );

            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
