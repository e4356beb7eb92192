//! Module navigation sidebar.

use eframe::egui::{self, RichText, ScrollArea, Ui};

use super::components::{colors, sidebar_button};
use crate::catalog::{ModuleKey, Section};
use crate::dashboard::{DashboardState, Message};

/// Sections listed under `key` when it is expanded. Only the active module
/// is expanded.
pub fn expanded_sections(state: &DashboardState, key: ModuleKey) -> Option<&'static [Section]> {
    (state.active_module == key).then_some(key.module().sections)
}

/// Render the sidebar. Returns the navigation message for a click, if any.
pub fn show(ctx: &egui::Context, state: &DashboardState) -> Option<Message> {
    let mut msg = None;

    egui::SidePanel::left("sidebar")
        .exact_width(256.0)
        .resizable(false)
        .frame(egui::Frame::new().fill(colors::SIDEBAR))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                for key in ModuleKey::ALL {
                    let module = key.module();
                    let text = RichText::new(format!("{} {}", module.icon, module.title)).size(15.0);
                    if sidebar_button(ui, text, state.active_module == key, 0.0).clicked() {
                        msg = Some(Message::SelectModule(key));
                    }

                    if let Some(sections) = expanded_sections(state, key)
                        && let Some(page) = show_sections(ui, state, sections)
                    {
                        msg = Some(Message::SelectPage(page.to_string()));
                    }
                }
            });
        });

    msg
}

fn show_sections(ui: &mut Ui, state: &DashboardState, sections: &'static [Section]) -> Option<&'static str> {
    let mut clicked = None;

    egui::Frame::new()
        .fill(colors::SIDEBAR_EXPANDED)
        .inner_margin(egui::Margin::symmetric(0, 8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for section in sections {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new(section.label.to_uppercase())
                            .size(11.0)
                            .color(colors::NEUTRAL),
                    );
                });
                for &page in section.pages {
                    let selected = state.active_page.as_deref() == Some(page);
                    if sidebar_button(ui, RichText::new(page).size(13.0), selected, 24.0).clicked() {
                        clicked = Some(page);
                    }
                }
            }
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_module_expands() {
        let state = DashboardState {
            active_module: ModuleKey::Sales,
            ..Default::default()
        };
        for key in ModuleKey::ALL {
            assert_eq!(expanded_sections(&state, key).is_some(), key == ModuleKey::Sales);
        }
    }

    #[test]
    fn test_expanded_sections_match_catalog() {
        for key in ModuleKey::ALL {
            let state = DashboardState {
                active_module: key,
                ..Default::default()
            };
            let sections = expanded_sections(&state, key).unwrap();
            let expected = key.module().sections;
            assert_eq!(sections.len(), expected.len());
            for (got, want) in sections.iter().zip(expected) {
                assert_eq!(got.label, want.label);
                assert_eq!(got.pages, want.pages);
            }
        }
    }

    #[test]
    fn test_sales_page_order() {
        let state = DashboardState {
            active_module: ModuleKey::Sales,
            ..Default::default()
        };
        let pages: Vec<_> = expanded_sections(&state, ModuleKey::Sales)
            .unwrap()
            .iter()
            .flat_map(|s| s.pages.iter().copied())
            .collect();
        assert_eq!(
            pages,
            [
                "POS Terminal",
                "Quotations",
                "Orders",
                "Customer Database",
                "Loyalty Program",
                "Returns",
                "Sales Reports",
                "Performance Metrics",
                "Forecasting",
            ]
        );
    }
}
