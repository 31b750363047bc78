use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::loader::{SUPPORTED_EXTENSIONS, load_file};
use crate::data::model::TimeUnit;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – settings
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Time unit in the sheet");
            ui.radio_value(&mut state.settings.time_unit, TimeUnit::Seconds, "seconds");
            ui.radio_value(&mut state.settings.time_unit, TimeUnit::Minutes, "minutes");
            ui.separator();

            ui.strong("Takt time (min)");
            ui.add(
                egui::DragValue::new(&mut state.settings.takt_minutes)
                    .range(0.0..=f64::MAX)
                    .speed(0.1)
                    .fixed_decimals(1),
            );
            ui.separator();

            ui.checkbox(&mut state.settings.show_table, "Show summary per station");
            ui.separator();

            if ui.button("Generate chart").clicked() {
                state.generate();
            }

            let legend = state.colors.legend_entries();
            if !legend.is_empty() {
                ui.separator();
                ui.strong("Categories");
                for (category, color) in legend {
                    ui.label(RichText::new(format!("■ {category}")).color(color));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – summary table
// ---------------------------------------------------------------------------

/// Per-station totals and delta vs takt, in seconds, one decimal.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    let Some(summary) = state.summary.as_ref().filter(|s| !s.is_empty()) else {
        return;
    };
    let with_delta = summary.deltas.is_some();

    ui.strong("Summary per station (seconds)");
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0));
    if with_delta {
        table = table.column(Column::auto().at_least(100.0));
    }

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Station");
            });
            header.col(|ui| {
                ui.strong("Total (s)");
            });
            if with_delta {
                header.col(|ui| {
                    ui.strong("Δ vs takt (s)");
                });
            }
        })
        .body(|mut body| {
            let bottleneck = summary.bottleneck.as_ref();
            for station in &summary.stations {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let mut text = RichText::new(station.station.to_string());
                        if bottleneck == Some(&station.station) {
                            text = text.strong().color(Color32::RED);
                        }
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", station.total_seconds));
                    });
                    if let Some(delta) = summary.delta_for(&station.station) {
                        row.col(|ui| {
                            ui.label(format!("{delta:+.1}"));
                        });
                    }
                });
            }
        });
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
            let can_export = state.summary.as_ref().is_some_and(|s| !s.is_empty());
            if ui
                .add_enabled(can_export, egui::Button::new("Export PNG…"))
                .clicked()
            {
                if let Some(path) = export::pick_export_path() {
                    state.pending_export = Some(path);
                    export::request_screenshot(ui.ctx());
                }
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(name), Some(table)) = (&state.source_name, &state.table) {
            ui.label(format!("{name}: {} rows", table.len()));
        }

        if let Some(summary) = &state.summary {
            ui.separator();
            ui.label(format!(
                "{} stations, {} categories",
                summary.stations.len(),
                summary.categories.len()
            ));
            if let Some(b) = &summary.bottleneck {
                ui.label(RichText::new(format!("Bottleneck: {b}")).strong());
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open task sheet")
        .add_filter("Supported files", SUPPORTED_EXTENSIONS)
        .add_filter("Excel", &["xlsx", "xlsm", "xls"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path) {
            Ok(table) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                state.set_table(table, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
