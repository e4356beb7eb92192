//! Action button row under the table.

use eframe::egui::{Color32, Ui};
use egui_phosphor::regular::{BARCODE, DOWNLOAD_SIMPLE, FLOPPY_DISK, PLUS, PRINTER, TRASH};

use super::components::{colored_icon_button, colors};
use crate::dashboard::{Action, DashboardState, Message};

/// One rendered button. `action` is `None` for buttons with no handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub icon: &'static str,
    pub fill: Color32,
    pub action: Option<Action>,
}

fn action_spec(action: Action) -> ButtonSpec {
    let (icon, fill) = match action {
        Action::New => (PLUS, colors::BLUE),
        Action::Save => (FLOPPY_DISK, colors::GREEN),
        Action::Delete => (TRASH, colors::RED),
        Action::Export => (DOWNLOAD_SIMPLE, colors::PURPLE),
        Action::Print => (PRINTER, colors::ORANGE),
    };
    ButtonSpec {
        label: action.label(),
        icon,
        fill,
        action: Some(action),
    }
}

/// Buttons for the current state, in display order.
pub fn buttons(state: &DashboardState) -> Vec<ButtonSpec> {
    let mut specs: Vec<_> = Action::ALL.into_iter().map(action_spec).collect();
    if state.shows_barcode() {
        specs.push(ButtonSpec {
            label: "Barcode",
            icon: BARCODE,
            fill: colors::INDIGO,
            action: None,
        });
    }
    specs
}

/// Render the buttons. All of them are disabled while an action is in flight.
pub fn show(ui: &mut Ui, state: &DashboardState) -> Option<Message> {
    let mut msg = None;

    ui.horizontal(|ui| {
        for spec in buttons(state) {
            let clicked = colored_icon_button(ui, spec.icon, spec.label, spec.fill, !state.loading).clicked();
            if clicked && let Some(action) = spec.action {
                msg = Some(Message::dispatch(action));
            }
        }
        if state.loading {
            ui.spinner();
        }
    });

    msg
}
