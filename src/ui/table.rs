use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Table;

const ROW_HEIGHT: f32 = 20.0;
const MAX_TABLE_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// Raw table view
// ---------------------------------------------------------------------------

/// Show a loaded table as-is: every column, every row, sheet order.
pub fn raw_table(ui: &mut Ui, table: &Table) {
    ui.label(format!(
        "{}: {} rows × {} columns",
        table.name,
        table.len(),
        table.columns.len()
    ));

    ui.push_id(&table.name, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
            .max_scroll_height(MAX_TABLE_HEIGHT)
            .header(ROW_HEIGHT, |mut header| {
                for column in &table.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(column.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let cells = &table.rows[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
