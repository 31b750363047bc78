use std::collections::{HashMap, HashSet};

use crate::error::SchemaError;

use super::model::{CellValue, NormalizedRow, RawTable, TimeUnit};

/// Canonical names of the required fields, in reporting order.
pub const STATION_FIELD: &str = "estacao";
pub const TIME_FIELD: &str = "tempo";
pub const CATEGORY_FIELD: &str = "categoria";

const REQUIRED: [&str; 3] = [STATION_FIELD, TIME_FIELD, CATEGORY_FIELD];

/// Column positions of the three required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub station: usize,
    pub time: usize,
    pub category: usize,
}

/// Resolve the required columns by lower-cased, trimmed header name.
///
/// A header repeated byte-for-byte counts once (the first column, as sheet
/// readers rename the copies). Otherwise, when two headers normalize to the
/// same key the later one wins.
pub fn resolve_columns(columns: &[String]) -> Result<ColumnMap, SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let lookup: HashMap<String, usize> = columns
        .iter()
        .enumerate()
        .filter(|&(_, name)| seen.insert(name.as_str()))
        .map(|(i, name)| (name.trim().to_lowercase(), i))
        .collect();

    let missing: Vec<&'static str> = REQUIRED
        .iter()
        .copied()
        .filter(|field| !lookup.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError { missing });
    }

    Ok(ColumnMap {
        station: lookup[STATION_FIELD],
        time: lookup[TIME_FIELD],
        category: lookup[CATEGORY_FIELD],
    })
}

/// Validate and clean a raw sheet.
///
/// Rows whose time cannot be read as a number are dropped, not reported.
/// Surviving rows keep their input order; durations come out in seconds.
pub fn normalize(table: &RawTable, unit: TimeUnit) -> Result<Vec<NormalizedRow>, SchemaError> {
    let cols = resolve_columns(&table.columns)?;
    let factor = unit.seconds_factor();

    let mut rows = Vec::with_capacity(table.len());
    for i in 0..table.len() {
        let raw_time = table.cell(i, cols.time);
        let Some(value) = raw_time.to_number() else {
            log::debug!("Dropping row {i}: time {raw_time} is not numeric");
            continue;
        };

        rows.push(NormalizedRow {
            station: table.cell(i, cols.station).clone(),
            duration_seconds: value * factor,
            category: category_label(table.cell(i, cols.category)),
        });
    }

    log::debug!(
        "Normalized {} of {} rows ({unit})",
        rows.len(),
        table.len()
    );
    Ok(rows)
}

/// Stringify, trim and upper-case a category cell. Missing cells become `NAN`.
fn category_label(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => "NAN".to_string(),
        other => other.to_string().trim().to_uppercase(),
    }
}
