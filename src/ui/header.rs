//! Title bar with placeholder icon buttons.

use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{BELL, QUESTION, SIGN_OUT};

/// Render the header. Its buttons are decorative and send nothing.
pub fn show(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").min_height(48.0).show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("Bookstore Management System").size(20.0).strong());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                for icon in [SIGN_OUT, QUESTION, BELL] {
                    ui.add(egui::Button::new(RichText::new(icon).size(18.0)).frame(false));
                }
            });
        });
    });
}
