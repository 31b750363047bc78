use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the input sheet
// ---------------------------------------------------------------------------

/// A dynamically-typed spreadsheet cell.
/// Stations are grouping keys in a `BTreeMap`, so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can group by CellValue --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

/// Whole floats keep their fractional part (`1.0`, not `1`), so a float
/// station id never reads as an integer label.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl CellValue {
    /// Numeric coercion of a time cell.
    ///
    /// Text is trimmed and parsed as a decimal; booleans count as 1/0.
    /// Anything else, including NaN, is `None`.
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(v) => *v,
            CellValue::Bool(b) => f64::from(u8::from(*b)),
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Null => return None,
        };
        (!value.is_nan()).then_some(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// RawTable – the sheet as loaded, before validation
// ---------------------------------------------------------------------------

static NULL_CELL: CellValue = CellValue::Null;

/// Column names plus row-major cells, exactly as read from the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        RawTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows read as `Null` in the missing cells.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Cell at (`row`, `col`), `Null` when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL_CELL)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalized records
// ---------------------------------------------------------------------------

/// Unit of the `Tempo` column in the input sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
}

impl TimeUnit {
    /// Multiplier that converts a value in this unit to seconds.
    pub fn seconds_factor(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "seconds"),
            TimeUnit::Minutes => write!(f, "minutes"),
        }
    }
}

/// One task after validation: station id, duration in seconds and an
/// upper-cased category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    pub station: CellValue,
    pub duration_seconds: f64,
    pub category: String,
}
