use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::NumericField;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – range filters
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut apply = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("filter_grid")
                .num_columns(3)
                .spacing([6.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    ui.strong("Min");
                    ui.strong("Max");
                    ui.end_row();

                    for field in NumericField::ALL {
                        let range = state.filters.range_mut(field);
                        ui.label(field.label());
                        for text in [&mut range.min, &mut range.max] {
                            let resp = ui.add(
                                egui::TextEdit::singleline(text)
                                    .desired_width(70.0)
                                    .hint_text("any"),
                            );
                            // Enter in any box applies, like the Apply button.
                            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                apply = true;
                            }
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply filters").clicked() {
                    apply = true;
                }
                if ui.button("Reset").clicked() {
                    state.reset_filters();
                }
            });
        });

    if apply {
        state.apply_filters();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(name) = state.source.as_deref().and_then(|p| p.file_name()) {
            ui.strong(name.to_string_lossy().into_owned());
        }

        if state.has_data() {
            let profitable = state.visible_records().filter(|r| r.is_profitable()).count();
            ui.label(format!(
                "{} records loaded, {} visible ({profitable} profitable)",
                state.records.len(),
                state.visible_indices.len()
            ));
            ui.separator();
        }

        let mut premium = state.is_premium();
        if ui
            .checkbox(&mut premium, "Premium fees")
            .on_hover_text("Use the premium sales tax rate for net profit")
            .changed()
        {
            state.set_premium(premium);
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – status line
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let mut text = RichText::new(&state.status.text);
        if state.status.is_error {
            text = text.color(Color32::RED);
        }
        ui.label(text);
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trade export")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(&path);
    }
}
