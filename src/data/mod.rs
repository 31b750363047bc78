/// Data layer: sheet loading, validation and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  resolve columns, coerce time, unit → seconds
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  station × category pivot, order, bottleneck, takt deltas
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod normalize;

use crate::error::SchemaError;

use aggregate::YamazumiSummary;
use model::{RawTable, TimeUnit};

/// Normalize then aggregate one sheet.
pub fn build_summary(
    table: &RawTable,
    unit: TimeUnit,
    takt_seconds: f64,
) -> Result<YamazumiSummary, SchemaError> {
    let rows = normalize::normalize(table, unit)?;
    Ok(aggregate::aggregate(&rows, takt_seconds))
}
