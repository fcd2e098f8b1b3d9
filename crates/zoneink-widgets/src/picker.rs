//! Color picker panel: one circular swatch per selectable color.
//!
//! The panel only exposes the selection; deciding what "active" means is the
//! core's business.

use egui::{Color32, CornerRadius, CursorIcon, Frame, Margin, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// Create the frame drawn behind the picker panel.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(8))
}

/// One selectable entry in the picker.
#[derive(Debug, Clone, Copy)]
pub struct PickerEntry<'a> {
    /// Stable color id, reported back on selection.
    pub id: &'a str,
    pub color: Color32,
}

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    diameter: f32,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            diameter: sizing::SWATCH,
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the swatch diameter.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Show the swatch and return whether it was clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(vec2(self.diameter, self.diameter), Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = self.diameter / 2.0;
            ui.painter().circle_filled(center, radius - 2.0, self.color);

            // Selection ring: black when selected, invisible otherwise, so
            // the layout does not shift on selection.
            let ring = if self.selected {
                Stroke::new(2.0, theme::SELECTION_RING)
            } else {
                Stroke::new(2.0, Color32::TRANSPARENT)
            };
            ui.painter().circle_stroke(center, radius - 1.0, ring);
        }

        let response = response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        response.clicked()
    }
}

/// Horizontal row of swatches, one per selectable color.
pub struct ColorPickerPanel<'a> {
    entries: &'a [PickerEntry<'a>],
    active_id: Option<&'a str>,
}

impl<'a> ColorPickerPanel<'a> {
    pub fn new(entries: &'a [PickerEntry<'a>], active_id: Option<&'a str>) -> Self {
        Self { entries, active_id }
    }

    /// Show the panel; returns the id of a swatch clicked this frame.
    pub fn show(self, ui: &mut Ui) -> Option<String> {
        let mut selected = None;
        panel_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = vec2(sizing::SWATCH_GAP, 0.0);
                for entry in self.entries {
                    let is_active = self.active_id == Some(entry.id);
                    if ColorSwatch::new(entry.color, entry.id)
                        .selected(is_active)
                        .show(ui)
                    {
                        selected = Some(entry.id.to_string());
                    }
                }
            });
        });
        selected
    }
}

/// Parse a CSS color string (e.g. `#6366f1`) to a Color32.
pub fn parse_css_color(color: &str) -> Color32 {
    if color.starts_with('#') && color.len() == 7 {
        let r = u8::from_str_radix(&color[1..3], 16).unwrap_or(128);
        let g = u8::from_str_radix(&color[3..5], 16).unwrap_or(128);
        let b = u8::from_str_radix(&color[5..7], 16).unwrap_or(128);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(128, 128, 128)
    }
}
