use std::path::PathBuf;

use crate::color::CategoryColors;
use crate::config::Settings;
use crate::data::aggregate::YamazumiSummary;
use crate::data::build_summary;
use crate::data::model::RawTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded sheet (None until user loads a file).
    pub table: Option<RawTable>,

    /// File name of the loaded sheet, for the top bar.
    pub source_name: Option<String>,

    /// Sidebar settings.
    pub settings: Settings,

    /// Result of the last "Generate chart".
    pub summary: Option<YamazumiSummary>,

    /// Colours of the categories in `summary`.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Destination of a requested PNG export, set until the screenshot arrives.
    pub pending_export: Option<PathBuf>,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Ingest a newly loaded sheet. The previous chart is discarded.
    pub fn set_table(&mut self, table: RawTable, source_name: String) {
        self.table = Some(table);
        self.source_name = Some(source_name);
        self.summary = None;
        self.colors = CategoryColors::default();
        self.status_message = None;
    }

    /// Run normalize + aggregate with the current settings.
    pub fn generate(&mut self) {
        let Some(table) = &self.table else {
            self.status_message = Some("Load a spreadsheet first.".to_string());
            return;
        };

        match build_summary(table, self.settings.time_unit, self.settings.takt_seconds()) {
            Ok(summary) => {
                if summary.is_empty() {
                    self.status_message = Some("No rows with a valid time.".to_string());
                } else {
                    self.status_message = None;
                }
                log::info!(
                    "Built board: {} stations, {} categories, bottleneck {:?}",
                    summary.stations.len(),
                    summary.categories.len(),
                    summary.bottleneck
                );
                self.colors = CategoryColors::new(&summary.categories);
                self.summary = Some(summary);
            }
            Err(e) => {
                log::error!("Failed to process sheet: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.summary = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn sheet(columns: &[&str]) -> RawTable {
        let mut t = RawTable::new(columns.iter().map(|c| c.to_string()).collect());
        t.push_row(vec!["Station 1".into(), CellValue::Integer(30), "weld".into()]);
        t
    }

    #[test]
    fn generate_without_table_sets_status() {
        let mut state = AppState::default();
        state.generate();
        assert!(state.summary.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn generate_builds_summary() {
        let mut state = AppState::default();
        state.set_table(sheet(&["Estacao", "Tempo", "Categoria"]), "t.csv".into());
        state.generate();
        let summary = state.summary.as_ref().unwrap();
        assert_eq!(summary.stations.len(), 1);
        assert_eq!(summary.takt_seconds, 210.0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn schema_error_is_shown_not_fatal() {
        let mut state = AppState::default();
        state.set_table(sheet(&["Station", "Tempo", "Categoria"]), "t.csv".into());
        state.generate();
        assert!(state.summary.is_none());
        assert!(state.status_message.unwrap().contains("estacao"));
    }
}
