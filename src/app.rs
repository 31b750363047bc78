use eframe::egui;

use crate::config::Settings;
use crate::export;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct YamazumiApp {
    pub state: AppState,
    /// Where the chart was drawn last frame, for cropping exports.
    chart_rect: Option<egui::Rect>,
}

impl YamazumiApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::with_settings(settings),
            chart_rect: None,
        }
    }

    /// Write out a requested PNG once egui hands over the screenshot.
    fn finish_export(&mut self, ctx: &egui::Context) {
        if self.state.pending_export.is_none() {
            return;
        }
        let Some(image) = export::take_screenshot(ctx) else {
            return;
        };
        let image = match self.chart_rect {
            Some(rect) => export::crop_to_rect(&image, rect, ctx.pixels_per_point()),
            None => (*image).clone(),
        };
        if let Some(path) = self.state.pending_export.take() {
            if let Err(e) = export::save_png(&image, &path) {
                log::error!("PNG export failed: {e:#}");
                self.state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for YamazumiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.finish_export(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: summary table ----
        if self.state.settings.show_table {
            egui::TopBottomPanel::bottom("summary_panel")
                .resizable(true)
                .default_height(180.0)
                .show(ctx, |ui| {
                    panels::summary_table(ui, &self.state);
                });
        }

        // ---- Central panel: chart ----
        let chart = egui::CentralPanel::default().show(ctx, |ui| {
            plot::yamazumi_plot(ui, &self.state);
        });
        self.chart_rect = Some(chart.response.rect);
    }
}
