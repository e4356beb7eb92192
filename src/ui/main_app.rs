//! Main application UI.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, RichText};
use egui_phosphor::regular::CARET_RIGHT;

use crate::config::AppConfig;
use crate::dashboard::{DashboardState, Message};
use crate::print::SystemPrinter;
use crate::scheduler::Scheduler;
use crate::store::Store;

use super::components::{card_frame, colors};
use super::{action_buttons, data_table, header, sidebar, toolbar};

/// Main application state.
pub struct DashboardApp {
    // Dropped before the runtime so pending timers are cancelled first.
    store: Store,
    _rt: tokio::runtime::Runtime,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let repaint_ctx = cc.egui_ctx.clone();
        let scheduler =
            Scheduler::new(rt.handle().clone()).with_waker(Arc::new(move || repaint_ctx.request_repaint()));
        let printer = SystemPrinter::new(rt.handle().clone());
        let store = Store::new(config.timing.clone(), scheduler, Box::new(printer));

        Self { store, _rt: rt }
    }

    /// Breadcrumb plus, once a page is chosen, toolbar, table and actions.
    fn show_content(ui: &mut egui::Ui, state: &DashboardState, messages: &mut Vec<Message>) {
        ui.horizontal(|ui| {
            let module = state.active();
            ui.label(RichText::new(module.icon).color(colors::NEUTRAL));
            ui.label(RichText::new(module.title).color(colors::NEUTRAL));
            if let Some(page) = &state.active_page {
                ui.label(RichText::new(CARET_RIGHT).color(colors::NEUTRAL));
                ui.label(RichText::new(page).color(colors::NEUTRAL));
            }
        });
        ui.add_space(16.0);

        if !state.detail_visible() {
            return;
        }

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            messages.extend(toolbar::show(ui, state));
            ui.add_space(12.0);
            data_table::show(ui, state);
            ui.add_space(12.0);
            ui.separator();
            messages.extend(action_buttons::show(ui, state));
        });

        messages.extend(toolbar::show_notification(ui.ctx(), state));
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fired timers
        self.store.pump();

        let mut messages = Vec::new();
        let state = self.store.state();

        header::show(ctx);
        messages.extend(sidebar::show(ctx, state));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            Self::show_content(ui, state, &mut messages);
        });

        for msg in messages {
            self.store.dispatch(msg);
        }

        // The waker normally repaints on fire; this keeps the frame loop alive meanwhile.
        if self.store.has_pending_timers() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!("Window closing, cancelling pending timers");
        self.store.shutdown();
    }
}
