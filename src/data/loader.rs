use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use calamine::{Data, Reader, open_workbook_auto};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Extensions accepted by [`load_file`], for file dialogs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods", "csv", "json", "parquet", "pq"];

/// Load a task sheet from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, header in row 1
/// * `.csv`     – header row, one task per line
/// * `.json`    – `[{ "Estacao": ..., "Tempo": ..., "Categoria": ... }, ...]`
/// * `.parquet` – flat columns of strings / numbers / bools
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.columns,
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Read the first worksheet. Row 1 is the header; fully empty sheets are an
/// error, a header without data is an empty table.
fn load_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.first() else {
        bail!("Workbook has no sheets");
    };
    if sheet_names.len() > 1 {
        log::info!("Reading sheet '{sheet_name}' (first of {})", sheet_names.len());
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .with_context(|| format!("reading sheet '{sheet_name}'"))?;

    let mut rows = range.rows();
    let header = rows.next().context("Sheet is empty (no header row)")?;
    let columns: Vec<String> = header.iter().map(header_text).collect();

    let mut table = RawTable::new(columns);
    for row in rows {
        table.push_row(row.iter().map(sheet_cell).collect());
    }
    Ok(table)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Whole-number floats become integers, as spreadsheet readers usually
/// report numeric id columns.
fn sheet_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            CellValue::Integer(*f as i64)
        }
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Empty | Data::Error(_) => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Estacao": "Station 1", "Tempo": 30, "Categoria": "weld" },
///   ...
/// ]
/// ```
///
/// Columns are ordered by first appearance; keys missing from a record are null.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub(crate) fn parse_json(text: &str) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = RawTable::new(columns);
    for rec in records {
        // Already checked above.
        let Some(obj) = rec.as_object() else { continue };
        let row = table
            .columns
            .iter()
            .map(|col| obj.get(col).map(json_to_cell).unwrap_or(CellValue::Null))
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one task per record.
/// Cell types are guessed per value: integers, floats, empty → null, and
/// everything else (including `true`/`false`) stays text.
fn load_csv(path: &Path) -> Result<RawTable> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    read_csv(reader)
}

pub(crate) fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<RawTable> {
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = RawTable::new(columns);
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        table.push_row(record.iter().map(guess_cell_type).collect());
    }

    Ok(table)
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of tasks.
///
/// Every column is read as a scalar cell (strings, ints, floats, bools).
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut table = RawTable::new(columns);
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| extract_cell(col, row))
                .collect();
            table.push_row(cells);
        }
    }

    Ok(table)
}

// -- Parquet / Arrow helpers --

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 => match col.as_any().downcast_ref::<StringArray>() {
            Some(s) => CellValue::Text(s.value(row).to_string()),
            None => CellValue::Null,
        },
        DataType::LargeUtf8 => CellValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map_or(CellValue::Null, |arr| CellValue::Integer(arr.value(row) as i64)),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map_or(CellValue::Null, |arr| CellValue::Integer(arr.value(row))),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map_or(CellValue::Null, |arr| CellValue::Float(arr.value(row) as f64)),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map_or(CellValue::Null, |arr| CellValue::Float(arr.value(row))),
        DataType::Boolean => col
            .as_any()
            .downcast_ref::<BooleanArray>()
            .map_or(CellValue::Null, |arr| CellValue::Bool(arr.value(row))),
        other => {
            log::debug!("Unsupported parquet column type {other:?}, reading as null");
            CellValue::Null
        }
    }
}
