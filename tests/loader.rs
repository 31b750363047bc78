//! File loading harness: each supported format is written to a tempdir and
//! read back through `load_file`, then pushed through the board.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rust_xlsxwriter::Workbook;
use yamazumi::data::loader::load_file;
use yamazumi::{CellValue, TimeUnit, build_summary};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn csv_sheet_builds_a_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "tasks.csv",
        "Estacao,Tempo,Categoria\nStation 2,1.5,weld\nStation 1,0.5, weld \nStation 1,n/a,paint\n",
    );
    let table = load_file(&path).unwrap();
    assert_eq!(table.len(), 3);

    let summary = build_summary(&table, TimeUnit::Minutes, 60.0).unwrap();
    assert_eq!(
        summary.station_order(),
        vec![CellValue::from("Station 1"), CellValue::from("Station 2")]
    );
    assert_eq!(summary.categories, vec!["WELD"]);
    assert_eq!(summary.totals[&CellValue::from("Station 2")], 90.0);
    assert_eq!(summary.bottleneck, Some(CellValue::from("Station 2")));
    assert_eq!(summary.delta_for(&CellValue::from("Station 1")), Some(-30.0));
}

#[test]
fn xlsx_first_sheet_builds_a_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Linha").unwrap();
    for (col, header) in ["Estacao", " TEMPO ", "categoria"].iter().enumerate() {
        sheet.write(0, col as u16, *header).unwrap();
    }
    // Column D carries data but no header.
    sheet.write(1, 3, "note").unwrap();
    sheet.write(1, 0, 10.0).unwrap();
    sheet.write(1, 1, 30.0).unwrap();
    sheet.write(1, 2, "weld").unwrap();
    sheet.write(2, 0, 2.0).unwrap();
    sheet.write(2, 1, 45.5).unwrap();
    sheet.write(2, 2, "paint").unwrap();
    sheet.write(3, 0, 1.0).unwrap();
    sheet.write(3, 1, 20.0).unwrap();
    sheet.write(3, 2, " weld ").unwrap();
    sheet.write(4, 0, 2.0).unwrap();
    sheet.write(4, 1, "n/a").unwrap();
    sheet.write(4, 2, "weld").unwrap();

    let other = workbook.add_worksheet();
    other.set_name("Outra").unwrap();
    other.write(0, 0, "Estacao").unwrap();
    other.write(0, 1, "Tempo").unwrap();
    other.write(0, 2, "Categoria").unwrap();
    other.write(1, 0, 99.0).unwrap();
    other.write(1, 1, 999.0).unwrap();
    other.write(1, 2, "x").unwrap();
    workbook.save(&path).unwrap();

    let table = load_file(&path).unwrap();
    assert_eq!(table.columns, vec!["Estacao", " TEMPO ", "categoria", ""]);
    assert_eq!(table.len(), 4);
    assert_eq!(table.cell(0, 0), &CellValue::Integer(10));
    assert_eq!(table.cell(1, 1), &CellValue::Float(45.5));
    assert_eq!(table.cell(0, 3), &CellValue::from("note"));
    assert_eq!(table.cell(1, 3), &CellValue::Null);

    let summary = build_summary(&table, TimeUnit::Seconds, 0.0).unwrap();
    assert_eq!(
        summary.station_order(),
        vec![CellValue::Integer(1), CellValue::Integer(2), CellValue::Integer(10)]
    );
    assert_eq!(summary.categories, vec!["PAINT", "WELD"]);
    assert_eq!(summary.totals[&CellValue::Integer(1)], 20.0);
    assert_eq!(summary.totals[&CellValue::Integer(2)], 45.5);
    assert_eq!(summary.totals[&CellValue::Integer(10)], 30.0);
    assert_eq!(summary.bottleneck, Some(CellValue::Integer(2)));
}

#[test]
fn json_and_csv_agree() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(
        dir.path(),
        "tasks.csv",
        "estacao,tempo,categoria\nA 1,10,x\nA 2,20,y\n",
    );
    let json = write(
        dir.path(),
        "tasks.json",
        r#"[{"estacao":"A 1","tempo":10,"categoria":"x"},{"estacao":"A 2","tempo":20,"categoria":"y"}]"#,
    );
    let from_csv = build_summary(&load_file(&csv).unwrap(), TimeUnit::Seconds, 0.0).unwrap();
    let from_json = build_summary(&load_file(&json).unwrap(), TimeUnit::Seconds, 0.0).unwrap();
    assert_eq!(from_csv, from_json);
}

#[test]
fn parquet_columns_are_read_as_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("Estacao", DataType::Int64, false),
        Field::new("Tempo", DataType::Float64, true),
        Field::new("Categoria", DataType::Utf8, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![3, 1])),
            Arc::new(Float64Array::from(vec![Some(4.0), None])),
            Arc::new(StringArray::from(vec!["walk", "walk"])),
        ],
    )
    .unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let table = load_file(&path).unwrap();
    assert_eq!(table.columns, vec!["Estacao", "Tempo", "Categoria"]);
    assert_eq!(table.cell(0, 0), &CellValue::Integer(3));
    assert_eq!(table.cell(1, 1), &CellValue::Null);

    let summary = build_summary(&table, TimeUnit::Seconds, 0.0).unwrap();
    assert_eq!(summary.station_order(), vec![CellValue::Integer(3)]);
}

#[test]
fn missing_file_and_bad_extension_fail() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_file(&dir.path().join("absent.csv")).is_err());
    let txt = write(dir.path(), "tasks.txt", "Estacao,Tempo,Categoria\n");
    assert!(load_file(&txt).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "tasks.json", "{not json");
    let err = load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing JSON"));
}
