use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::profit_color;
use crate::data::sort::SortKey;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trade table (central panel)
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 22.0;

/// Render the sortable record table. Header clicks change the sort.
pub fn trade_table(ui: &mut Ui, state: &mut AppState) {
    if !state.has_data() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Drop a JSON export here or use File → Open…");
        });
        return;
    }

    let mut clicked_column = None;
    let sort = state.sort;
    let rates = state.tax_rates;
    let highlighted_row = state.highlighted_row();
    let scroll_target = state.take_scroll_target();

    let mut table = TableBuilder::new(ui);
    if let Some(row) = scroll_target {
        table = table.scroll_to_row(row, Some(egui::Align::Center));
    }

    table
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(200.0).at_least(80.0).clip(true)) // Item
        .column(Column::initial(110.0).clip(true)) // Image
        .columns(Column::initial(85.0).at_least(50.0), 9)
        .header(24.0, |mut header| {
            for key in SortKey::ALL {
                header.col(|ui| {
                    let mut label = key.label().to_string();
                    if key == sort.key {
                        label = format!("{label} {}", sort.arrow());
                    }
                    if ui
                        .selectable_label(key == sort.key, RichText::new(label).strong())
                        .clicked()
                    {
                        clicked_column = Some(key.column());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                row.set_selected(highlighted_row == Some(row.index()));
                let rec = &state.records[state.visible_indices[row.index()]];
                let tone = profit_color(rec.is_profitable());
                let net_hint = format!(
                    "After fees: {:.0} ({:.1}%)",
                    rec.net_profit(rates),
                    rec.net_profit_percent(rates)
                );

                for (col, cell) in rec.display_cells().into_iter().enumerate() {
                    row.col(|ui| {
                        match SortKey::from_column(col) {
                            Some(SortKey::Profit | SortKey::ProfitPercent) => {
                                ui.label(RichText::new(cell).color(tone))
                                    .on_hover_text(net_hint.as_str());
                            }
                            Some(SortKey::Image) => {
                                ui.label(cell).on_hover_text(rec.image.as_str());
                            }
                            _ => {
                                ui.label(cell);
                            }
                        }
                    });
                }
            });
        });

    if let Some(col) = clicked_column {
        state.select_sort_column(col);
    }
}
