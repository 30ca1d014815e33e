use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_plot::{Plot, PlotPoints, Points};

use crate::color::{profit_color, score_color};
use crate::data::model::format_amount;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Opportunity rating (right panel)
// ---------------------------------------------------------------------------

/// Scatter of margin against sales velocity for the visible rows, plus the
/// ranked list. Clicking an entry highlights its row in the table.
pub fn rating_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Best opportunities");
    ui.separator();

    let ratings = state.ratings();
    if ratings.is_empty() {
        ui.label("Nothing to rate.");
        return;
    }

    Plot::new("rating_plot")
        .height(220.0)
        .x_axis_label("Profit %")
        .y_axis_label("Sold/day")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for r in &ratings {
                let rec = &state.records[r.index];
                let points = Points::new(PlotPoints::new(vec![[
                    rec.profit_percent,
                    rec.sold_per_day,
                ]]))
                .name(&rec.title)
                .radius(if state.highlighted == Some(r.index) { 6.0 } else { 3.0 })
                .color(score_color(r.score));
                plot_ui.points(points);
            }
        });

    ui.separator();
    ui.add(
        egui::TextEdit::singleline(&mut state.rating_search)
            .hint_text("Search items…")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    let mut picked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (rank, r) in state.searched_ratings() {
                let rec = &state.records[r.index];
                let selected = state.highlighted == Some(r.index);
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(format!("{rank}."));
                    ui.label(RichText::new(format!("{:.2}", r.score)).color(score_color(r.score)));
                    if ui.selectable_label(selected, RichText::new(rec.title.as_str()).strong()).clicked() {
                        picked = Some(r.index);
                    }
                });
                let net = rec.net_profit(state.tax_rates);
                ui.label(
                    RichText::new(format!(
                        "{} → {}  ·  net {}  ·  {}/day",
                        rec.from_location,
                        rec.to_location,
                        format_amount(net),
                        format_amount(rec.sold_per_day)
                    ))
                    .color(profit_color(net > 0.0))
                    .small(),
                );
                ui.add_space(2.0);
            }
        });

    if let Some(index) = picked {
        state.highlight_record(index);
    }
}
