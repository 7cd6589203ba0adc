//! Integration tests for fixture generation

use calamine::{open_workbook, Data, Reader, Xlsx};
use sheetfixtures::fixtures::{self, REPORT_DIR, RESOURCES_DIR};
use sheetfixtures::{CellValue, FixtureError, Workbook, WorkbookReader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project_root() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join(RESOURCES_DIR)).unwrap();
    root
}

fn assert_text_cells(sheet: &sheetfixtures::SheetData, expected: &[(u32, u32, &str)]) {
    for &(row, col, value) in expected {
        assert_eq!(
            sheet.cell(row, col),
            Some(&CellValue::String(value.to_string())),
            "{} ({}, {})",
            sheet.name,
            row,
            col
        );
    }
    assert_eq!(sheet.len(), expected.len(), "{}", sheet.name);
}

#[test]
fn test_single_sheet_fixture() {
    let root = project_root();
    let path = fixtures::generate_single_sheet(root.path()).unwrap();
    assert_eq!(path, root.path().join("src/test/resources/test.xlsx"));

    let mut reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_names(), ["Sheet1"]);

    let sheet = reader.read_sheet("Sheet1").unwrap();
    assert_text_cells(
        &sheet,
        &[
            (1, 1, "ID"),
            (1, 2, "Value"),
            (2, 1, "1"),
            (2, 2, "10"),
            (3, 1, "2"),
            (3, 2, "20"),
        ],
    );
}

#[test]
fn test_multi_sheet_fixture() {
    let root = project_root();
    let path = fixtures::generate_multi_sheet(root.path()).unwrap();
    assert!(path.ends_with("test_multi.xlsx"));

    let mut reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_names(), ["Sheet1", "Sheet2"]);

    let sheet1 = reader.read_sheet("Sheet1").unwrap();
    assert_eq!(sheet1.row_strings(2), vec!["1", "10"]);
    assert_eq!(sheet1.row_strings(3), vec!["2", "20"]);

    let sheet2 = reader.read_sheet("Sheet2").unwrap();
    assert_text_cells(
        &sheet2,
        &[
            (1, 1, "ID"),
            (1, 2, "Value"),
            (2, 1, "3"),
            (2, 2, "30"),
            (3, 1, "4"),
            (3, 2, "40"),
        ],
    );
}

#[test]
fn test_basic_fixtures_open_in_calamine() {
    let root = project_root();
    let single = fixtures::generate_single_sheet(root.path()).unwrap();
    let multi = fixtures::generate_multi_sheet(root.path()).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&single).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);
    let range = workbook.worksheet_range("Sheet1").unwrap();
    assert_eq!(range.get_size(), (3, 2));
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("ID".into())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("1".into())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::String("10".into())));
    assert_eq!(range.get_value((2, 1)), Some(&Data::String("20".into())));

    let mut workbook: Xlsx<_> = open_workbook(&multi).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Sheet1".to_string(), "Sheet2".to_string()]
    );
    let range = workbook.worksheet_range("Sheet2").unwrap();
    assert_eq!(range.get_value((0, 1)), Some(&Data::String("Value".into())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("3".into())));
    assert_eq!(range.get_value((2, 1)), Some(&Data::String("40".into())));
}

#[test]
fn test_numbers_in_basic_fixtures_are_text() {
    let root = project_root();
    let path = fixtures::generate_single_sheet(root.path()).unwrap();

    let sheet = WorkbookReader::open(&path)
        .unwrap()
        .read_sheet("Sheet1")
        .unwrap();
    assert_eq!(sheet.text(2, 2), Some("10"));
    assert_eq!(sheet.cell(2, 2).unwrap().as_f64(), None);
}

#[test]
fn test_generation_is_idempotent() {
    let root = project_root();

    let path = fixtures::generate_multi_sheet(root.path()).unwrap();
    let first = WorkbookReader::open(&path).unwrap().read_all().unwrap();

    let again = fixtures::generate_multi_sheet(root.path()).unwrap();
    assert_eq!(path, again);
    let second = WorkbookReader::open(&again).unwrap().read_all().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_directory_fails_without_file() {
    let root = TempDir::new().unwrap();
    let expected = root.path().join("src/test/resources/test.xlsx");

    let result = fixtures::generate_single_sheet(root.path());
    assert!(
        matches!(result, Err(FixtureError::IoError(_))),
        "got {:?}",
        result
    );
    assert!(!expected.exists());
}

#[test]
fn test_missing_sheet_reported() {
    let root = project_root();
    let path = fixtures::generate_single_sheet(root.path()).unwrap();

    let mut reader = WorkbookReader::open(&path).unwrap();
    match reader.read_sheet("Sheet2") {
        Err(FixtureError::SheetNotFound { sheet, available }) => {
            assert_eq!(sheet, "Sheet2");
            assert_eq!(available, "Sheet1");
        }
        other => panic!("expected SheetNotFound, got {:?}", other),
    }
}

#[test]
fn test_regenerate_creates_directory_and_catalog() {
    let root = TempDir::new().unwrap();
    let written = fixtures::generate_all(root.path()).unwrap();

    let catalog = fixtures::catalog();
    assert_eq!(written.len(), catalog.len());
    for (path, fixture) in written.iter().zip(&catalog) {
        assert!(path.is_file(), "{} missing", path.display());
        let reader = WorkbookReader::open(path).unwrap();
        let expected: Vec<_> = fixture.sheets.iter().map(|s| s.name).collect();
        assert_eq!(reader.sheet_names(), expected.as_slice());
    }
}

#[test]
fn test_offset_header_sample() {
    let root = project_root();
    let path = fixtures::excel_offset().generate(root.path()).unwrap();

    let sheet = WorkbookReader::open(&path)
        .unwrap()
        .read_sheet("Test Sheet")
        .unwrap();
    assert_eq!(sheet.text(1, 1), Some("This is not the header"));
    assert!(sheet.row_strings(2).is_empty());
    assert_eq!(
        sheet.row_strings(4),
        vec!["Category", "Subcategory", "Value1", "Value2"]
    );
    assert_eq!(sheet.cell(5, 3), Some(&CellValue::Int(10)));
    assert_eq!(sheet.cell(5, 4), Some(&CellValue::Int(20)));
}

#[test]
fn test_mixed_validity_multi_sample() {
    let root = project_root();
    let path = fixtures::multi_mixed().generate(root.path()).unwrap();

    let mut reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(
        reader.sheet_names(),
        [
            "Valid Sheet 1",
            "Empty Sheet",
            "Valid Sheet 2",
            "Invalid Sheet - Fewer Columns"
        ]
    );
    assert!(reader.read_sheet("Empty Sheet").unwrap().is_empty());

    let fewer = reader.read_sheet("Invalid Sheet - Fewer Columns").unwrap();
    assert_eq!(fewer.row_strings(1), vec!["Category", "Value1"]);
    assert_eq!(fewer.cell(2, 2), Some(&CellValue::Int(70)));
}

#[test]
fn test_mixed_data_sample_keeps_text_in_numeric_column() {
    let root = project_root();
    let path = fixtures::excel_mixed().generate(root.path()).unwrap();

    let sheet = WorkbookReader::open(&path)
        .unwrap()
        .read_sheet("Test Sheet")
        .unwrap();
    assert_eq!(sheet.text(3, 3), Some("Not a number"));
    assert_eq!(sheet.cell(3, 4), Some(&CellValue::Int(50)));
    assert_eq!(sheet.cell(2, 3), Some(&CellValue::Int(30)));
}

#[test]
fn test_report_sample_written_under_etc() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join(REPORT_DIR)).unwrap();

    let path = fixtures::generate_report_sample(root.path()).unwrap();
    assert_eq!(path, root.path().join("etc/report.xlsx"));

    let mut reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_names(), ["Sample Data"]);
    let sheet = reader.read_sheet("Sample Data").unwrap();
    assert_eq!(
        sheet.row_strings(1),
        vec!["Category", "Subcategory", "Value1", "Value2"]
    );
    assert_eq!(sheet.text(2, 1), Some("Category A"));
    assert_eq!(sheet.text(3, 2), Some(""));
    assert_eq!(sheet.cell(3, 3), Some(&CellValue::Int(30)));
    assert_eq!(sheet.cell(4, 4), Some(&CellValue::Int(60)));
    assert_eq!(sheet.cell(5, 1), None);
}

#[test]
fn test_report_sample_needs_etc_directory() {
    let root = TempDir::new().unwrap();
    let result = fixtures::generate_report_sample(root.path());
    assert!(matches!(result, Err(FixtureError::IoError(_))), "got {:?}", result);
    assert!(!root.path().join("etc").exists());
}

#[test]
fn test_empty_workbook_is_not_saved() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("empty.xlsx");

    let result = Workbook::empty().save(&path);
    assert!(matches!(result, Err(FixtureError::WriteError(_))), "got {:?}", result);
    assert!(!path.exists());
}

#[test]
fn test_multiline_text_survives_roundtrip() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("multiline.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.active_mut().unwrap();
    sheet.set_cell(1, 1, "line one\nline two").unwrap();
    sheet.set_cell(1, 2, "tab\tseparated").unwrap();
    workbook.save(&path).unwrap();

    let sheet = WorkbookReader::open(&path)
        .unwrap()
        .read_sheet("Sheet")
        .unwrap();
    assert_eq!(sheet.text(1, 1), Some("line one\nline two"));
    assert_eq!(sheet.text(1, 2), Some("tab\tseparated"));
}

#[test]
fn test_special_characters_survive_roundtrip() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("escaped.xlsx");

    let mut workbook = Workbook::new();
    workbook.rename_sheet(0, "R&D <draft>").unwrap();
    let sheet = workbook.active_mut().unwrap();
    sheet.set_cell(1, 1, "Tom & Jerry's \"show\"").unwrap();
    sheet.set_cell(1, 2, "  padded").unwrap();
    sheet.set_cell(2, 27, 2.5).unwrap();
    workbook.save(&path).unwrap();

    let mut reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_names(), ["R&D <draft>"]);
    let sheet = reader.read_sheet("R&D <draft>").unwrap();
    assert_eq!(sheet.text(1, 1), Some("Tom & Jerry's \"show\""));
    assert_eq!(sheet.text(1, 2), Some("  padded"));
    assert_eq!(sheet.cell(2, 27), Some(&CellValue::Float(2.5)));
}

#[test]
fn test_save_overwrites_existing_file() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("overwrite.xlsx");
    fs::write(&path, b"not a workbook").unwrap();

    let mut workbook = Workbook::new();
    workbook.active_mut().unwrap().set_cell(1, 1, "fresh").unwrap();
    workbook.save(&path).unwrap();

    let sheet = WorkbookReader::open(Path::new(&path))
        .unwrap()
        .read_sheet("Sheet")
        .unwrap();
    assert_eq!(sheet.text(1, 1), Some("fresh"));
}
