mod common;

use common::{build_xlsx, round_trip_xlsx, SheetSpec};
use schedsift::algorithm::extract_timetable;
use schedsift::excel::{load_workbook_bytes, sample_cell_texts, MergedRegion};
use schedsift::ExtractError;

#[test]
fn test_xlsx_cells_and_merges_are_loaded() {
    let sheets = load_workbook_bytes(&round_trip_xlsx()).unwrap();
    assert_eq!(sheets.len(), 1);

    let sheet = &sheets[0];
    assert_eq!(sheet.name, "Timetable");
    assert_eq!(sheet.raw(0, 2), "08:00-09:30");
    assert_eq!(sheet.raw(1, 2), common::ROUND_TRIP_CELL);
    assert_eq!(sheet.raw(3, 1), "Lab 10");
    assert_eq!(sheet.merged_regions(), &[MergedRegion::new((1, 1), (2, 1))]);
}

#[test]
fn test_xlsx_round_trip_extraction() {
    let sheets = load_workbook_bytes(&round_trip_xlsx()).unwrap();
    let output = extract_timetable(&sheets, None);
    assert_eq!(output.total_entries, 1);
    let entry = &output.section_data["BSSE-4C"].entries[0];
    assert_eq!(entry.day, "Monday");
    assert_eq!(entry.start_time, "8:00 AM");
    assert_eq!(entry.end_time, "9:30 AM");
    assert_eq!(entry.room, "Room #05");
    assert_eq!(entry.confidence, 1.0);
}

#[test]
fn test_sheet_order_is_preserved() {
    let bytes = build_xlsx(&[
        SheetSpec {
            name: "Cover",
            rows: vec![vec!["Time Table Fall 2024"]],
            merges: vec![],
        },
        SheetSpec {
            name: "BSSE-4C",
            rows: vec![vec!["Time", "Monday", "Tuesday", "Wednesday"]],
            merges: vec![],
        },
    ]);
    let sheets = load_workbook_bytes(&bytes).unwrap();
    let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Cover", "BSSE-4C"]);
}

#[test]
fn test_sample_cell_texts() {
    let sheets = load_workbook_bytes(&round_trip_xlsx()).unwrap();
    let samples = sample_cell_texts(&sheets, 3, 7);
    assert_eq!(samples, vec!["08:00-0", "09:30-1", "Monday"]);
    assert_eq!(sample_cell_texts(&sheets, 35, 120).len(), 7);
}

#[test]
fn test_garbage_is_malformed() {
    let err = load_workbook_bytes(b"PK\x03\x04 not really a zip").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedWorkbook(_)));
}

#[test]
fn test_empty_upload_is_malformed() {
    let err = load_workbook_bytes(&[]).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedWorkbook(_)));
}
