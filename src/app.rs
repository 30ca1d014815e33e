use eframe::egui::{self, Align2, Color32, Id, LayerId, Order, TextStyle};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TradeViewerApp {
    pub state: AppState,
}

impl TradeViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Load the first dropped file that has a path on disk.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            log::debug!("File dropped: {}", path.display());
            self.state.load_file(&path);
        }
    }

    fn paint_drop_hint(&self, ctx: &egui::Context) {
        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("drop_target")));
        let screen = ctx.screen_rect();
        painter.rect_filled(screen, 0.0, Color32::from_black_alpha(160));
        painter.text(
            screen.center(),
            Align2::CENTER_CENTER,
            "Drop to load",
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

impl eframe::App for TradeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: rating ----
        if self.state.has_data() {
            egui::SidePanel::right("rating_panel")
                .default_width(300.0)
                .resizable(true)
                .show(ctx, |ui| {
                    plot::rating_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::trade_table(ui, &mut self.state);
        });

        self.paint_drop_hint(ctx);
    }
}
