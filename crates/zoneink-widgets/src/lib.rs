//! Reusable egui widget components for ZoneInk.

pub mod picker;

pub use picker::{ColorPickerPanel, ColorSwatch, PickerEntry, panel_frame, parse_css_color};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Swatch diameter in the picker panel.
    pub const SWATCH: f32 = 48.0;
    /// Gap between swatches.
    pub const SWATCH_GAP: f32 = 16.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Ring drawn around the selected swatch.
    pub const SELECTION_RING: Color32 = Color32::BLACK;
    /// Panel background.
    pub const PANEL_BG: Color32 = Color32::WHITE;
}
