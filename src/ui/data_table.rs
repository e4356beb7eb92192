//! Record table.

use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder, TableRow};

use super::components::colors;
use crate::dashboard::DashboardState;

const ROW_HEIGHT: f32 = 28.0;

/// Column count: headers or the widest row, whichever is larger.
///
/// Cells are placed by position, so a row may be wider than the header set
/// (always the case for management, which has no headers).
pub fn column_count(headers: &[&str], rows: &[Vec<String>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0).max(headers.len())
}

pub fn show(ui: &mut Ui, state: &DashboardState) {
    let headers = state.table_headers();
    let rows: Vec<Vec<String>> = state.rows.iter().map(|r| r.cells()).collect();
    let columns = column_count(headers, &rows);

    if columns == 0 {
        ui.label(RichText::new("No records").color(colors::NEUTRAL));
        return;
    }

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0), columns)
        .max_scroll_height(400.0);

    if headers.is_empty() {
        table.body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |row| {
                let index = row.index();
                fill_row(row, &rows[index]);
            })
        });
    } else {
        table
            .header(ROW_HEIGHT, |mut header| {
                for h in headers {
                    header.col(|ui| {
                        ui.strong(*h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |row| {
                    let index = row.index();
                    fill_row(row, &rows[index]);
                })
            });
    }
}

fn fill_row(mut row: TableRow<'_, '_>, cells: &[String]) {
    for cell in cells {
        row.col(|ui| {
            ui.label(cell);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_prefers_headers() {
        let rows = vec![vec!["1".to_string()]];
        assert_eq!(column_count(&["ISBN", "Title"], &rows), 2);
    }

    #[test]
    fn test_column_count_without_headers_uses_rows() {
        let rows = vec![vec!["1".to_string()], vec!["2".to_string(), "x".to_string(), "y".to_string()]];
        assert_eq!(column_count(&[], &rows), 3);
        assert_eq!(column_count(&[], &[]), 0);
    }
}
