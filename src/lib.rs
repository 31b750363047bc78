//! Yamazumi board: per-station task time stacked by category, compared
//! against takt time.
//!
//! The `data` module is the whole computation; `app`, `ui`, `color` and
//! `export` are the egui viewer drawn on top of it.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod state;
pub mod ui;

pub use data::aggregate::{StationOrder, StationSummary, YamazumiSummary, aggregate};
pub use data::build_summary;
pub use data::model::{CellValue, NormalizedRow, RawTable, TimeUnit};
pub use data::normalize::normalize;
pub use error::{ConfigError, SchemaError};
