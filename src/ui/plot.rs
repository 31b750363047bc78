use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, Plot, PlotPoint, Text};

use crate::data::aggregate::YamazumiSummary;
use crate::state::AppState;

const BAR_WIDTH: f64 = 0.6;

// ---------------------------------------------------------------------------
// Yamazumi chart (central panel)
// ---------------------------------------------------------------------------

/// Render the stacked bar chart in the central panel.
pub fn yamazumi_plot(ui: &mut Ui, state: &AppState) {
    let summary = match &state.summary {
        Some(s) if !s.is_empty() => s,
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a sheet and press \"Generate chart\"  (File → Open…)");
            });
            return;
        }
    };

    let labels: Vec<String> = summary.stations.iter().map(|s| s.station.to_string()).collect();
    let charts = stacked_charts(summary, state);

    Plot::new("yamazumi_plot")
        .legend(Legend::default())
        .x_axis_label("Station")
        .y_axis_label("Time (s)")
        .x_axis_formatter(move |mark, _range| station_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }

            if summary.takt_seconds > 0.0 {
                plot_ui.hline(
                    HLine::new(summary.takt_seconds)
                        .name(format!("Takt: {:.0}s", summary.takt_seconds))
                        .color(Color32::RED)
                        .style(egui_plot::LineStyle::dashed_loose())
                        .width(2.0),
                );
            }

            if let Some(idx) = summary.bottleneck_index() {
                let top = summary.stations[idx].total_seconds;
                plot_ui.text(Text::new(
                    PlotPoint::new(idx as f64, top * 1.05),
                    RichText::new("▼ Bottleneck").strong(),
                ));
            }
        });
}

/// One chart per category, each stacked on the ones before it.
fn stacked_charts(summary: &YamazumiSummary, state: &AppState) -> Vec<BarChart> {
    let mut charts: Vec<BarChart> = Vec::with_capacity(summary.categories.len());
    for category in &summary.categories {
        let bars: Vec<Bar> = summary
            .stations
            .iter()
            .enumerate()
            .map(|(x, s)| {
                Bar::new(x as f64, s.by_category[category])
                    .width(BAR_WIDTH)
                    .name(format!("{} – {category}", s.station))
            })
            .collect();

        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(category)
            .color(state.colors.color_for(category))
            .stack_on(&below);
        charts.push(chart);
    }
    charts
}

/// Axis label for a tick: the station at integer positions, nothing between.
fn station_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
