//! Reusable egui widget components for the Caliper panels.
//!
//! - **Buttons**: styled text buttons
//! - **Layout**: section labels, separators
//! - **Panel**: panel frames, metric readout rows

pub mod buttons;
pub mod layout;
pub mod panel;

pub use buttons::TextButton;
pub use layout::{section_label, separator, vertical_separator};
pub use panel::{metric_row, panel_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard button height
    pub const BUTTON_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
