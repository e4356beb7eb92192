//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Ui};

/// Palette shared by the panels.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);

    pub const SIDEBAR: Color32 = Color32::from_rgb(31, 41, 55);
    pub const SIDEBAR_EXPANDED: Color32 = Color32::from_rgb(17, 24, 39);
    pub const SIDEBAR_ACTIVE: Color32 = Color32::from_rgb(55, 65, 81);
    pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(209, 213, 219);

    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
    pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
    pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
    pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
    pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
    pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241);
}

/// Filled button with a leading icon glyph and white text.
pub fn colored_icon_button(ui: &mut Ui, icon: &str, label: &str, fill: Color32, enabled: bool) -> Response {
    let button = egui::Button::new(RichText::new(format!("{icon} {label}")).color(Color32::WHITE)).fill(fill);
    ui.add_enabled(enabled, button)
}

/// Full-width, left-aligned sidebar entry.
pub fn sidebar_button(ui: &mut Ui, text: RichText, selected: bool, indent: f32) -> Response {
    let fill = if selected {
        colors::SIDEBAR_ACTIVE
    } else {
        Color32::TRANSPARENT
    };
    let width = ui.available_width();
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.add_sized(
            [width - indent, 32.0],
            egui::Button::new(text.color(colors::SIDEBAR_TEXT))
                .fill(fill)
                .frame(selected),
        )
    })
    .inner
}

/// White card holding the page detail.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::WHITE)
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(8))
        .stroke(egui::Stroke::new(1.0, Color32::from_gray(225)))
}
