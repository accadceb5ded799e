//! Buttons that edit points through the slider's imperative handle.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui};
use rangeslider_core::{format_value, RangeSlider};

use crate::{sizing, theme};

/// A flat text button.
pub struct PointButton<'a> {
    label: &'a str,
}

impl<'a> PointButton<'a> {
    /// Create a new button.
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(12.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let size = vec2(galley.size().x + 16.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.label,
                font_id,
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// "Add" and "Remove" buttons for a fixed point, driven through the handle.
///
/// Both buttons are always live; adding a marked point or removing an
/// unmarked one is a silent no-op. Returns true if either was clicked.
pub fn point_controls(ui: &mut Ui, slider: &mut RangeSlider, point: f64) -> bool {
    let label = format_value(point);
    let mut clicked = false;

    ui.horizontal(|ui| {
        if PointButton::new(&format!("Add point at {}", label)).show(ui) {
            log::debug!("Adding point {} from controls", label);
            slider.handle().add_point(point);
            clicked = true;
        }
        if PointButton::new(&format!("Remove point at {}", label)).show(ui) {
            log::debug!("Removing point {} from controls", label);
            slider.handle().remove_point(point);
            clicked = true;
        }
    });

    clicked
}
