//! Search row and the notification banner.

use eframe::egui::{self, Align2, RichText, Ui};
use egui_phosphor::regular::{FUNNEL, MAGNIFYING_GLASS, X};

use super::components::colors;
use crate::dashboard::{DashboardState, Message};
use crate::models::NotificationKind;

/// Render the toolbar. The query is echoed into state and nothing filters on it.
pub fn show(ui: &mut Ui, state: &DashboardState) -> Option<Message> {
    let mut msg = None;

    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        let mut query = state.search_query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .desired_width(220.0)
                .hint_text("Search..."),
        );
        if response.changed() {
            msg = Some(Message::SearchChanged(query));
        }

        // Filters has no behavior behind it.
        ui.add(egui::Button::new(format!("{FUNNEL} Filters")));
    });

    msg
}

/// Floating banner in the top-right corner while a notification is live.
pub fn show_notification(ctx: &egui::Context, state: &DashboardState) -> Option<Message> {
    let notification = state.notification.as_ref()?;
    let mut msg = None;

    let accent = match notification.kind {
        NotificationKind::Success => colors::SUCCESS,
        NotificationKind::Warning => colors::WARNING,
    };

    egui::Area::new(egui::Id::new("notification_banner"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 64.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .stroke(egui::Stroke::new(1.0, accent))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(notification.kind.title()).strong().color(accent));
                            ui.label(&notification.message);
                        });
                        if ui.small_button(X).clicked() {
                            msg = Some(Message::DismissNotification);
                        }
                    });
                });
        });

    msg
}
