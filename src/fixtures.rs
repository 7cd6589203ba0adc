//! Catalog of the fixture workbooks used by the report parser tests
//!
//! Every fixture is a fixed list of sheets with literal cell values. The two
//! basic fixtures (`test.xlsx`, `test_multi.xlsx`) store every value as text,
//! including the numbers. The parser samples store numeric columns as numbers.
//!
//! ```no_run
//! use sheetfixtures::fixtures;
//!
//! let path = fixtures::generate_single_sheet(".")?;
//! assert!(path.ends_with("src/test/resources/test.xlsx"));
//! # Ok::<(), sheetfixtures::FixtureError>(())
//! ```

use crate::error::Result;
use crate::types::CellValue;
use crate::workbook::Workbook;
use std::path::{Path, PathBuf};

/// Directory, relative to the project root, that fixtures are written to
pub const RESOURCES_DIR: &str = "src/test/resources";

/// Directory, relative to the project root, holding the sample report
pub const REPORT_DIR: &str = "etc";

pub const SINGLE_SHEET_FILE: &str = "test.xlsx";
pub const MULTI_SHEET_FILE: &str = "test_multi.xlsx";
pub const REPORT_SAMPLE_FILE: &str = "report.xlsx";

/// One sheet of a fixture: its name and the rows it populates
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFixture {
    pub name: &'static str,
    /// (1-based row, values from column 1)
    pub rows: Vec<(u32, Vec<CellValue>)>,
}

impl SheetFixture {
    fn new(name: &'static str) -> Self {
        SheetFixture {
            name,
            rows: Vec::new(),
        }
    }

    fn row(mut self, row: u32, values: Vec<CellValue>) -> Self {
        self.rows.push((row, values));
        self
    }
}

/// A fixture workbook: target location plus ordered sheets
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Output directory relative to the project root
    pub dir: &'static str,
    pub file_name: &'static str,
    pub sheets: Vec<SheetFixture>,
}

impl Fixture {
    /// Materialize the fixture as a workbook. The first sheet reuses the
    /// workbook's default sheet; the rest are appended in order.
    pub fn build(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        for (idx, spec) in self.sheets.iter().enumerate() {
            let sheet = if idx == 0 {
                workbook.rename_sheet(0, spec.name)?
            } else {
                workbook.create_sheet(spec.name)?
            };
            for (row, values) in &spec.rows {
                sheet.set_row(*row, values.iter().cloned())?;
            }
        }
        Ok(workbook)
    }

    /// Path of this fixture under `root`
    pub fn path_in(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(self.dir).join(self.file_name)
    }

    /// Build and save the fixture under its directory in `root`. The
    /// directory must already exist.
    pub fn generate(&self, root: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.path_in(root);
        let workbook = self.build()?;
        workbook.save(&path)?;
        tracing::info!(
            path = %path.display(),
            sheets = ?workbook.sheet_names(),
            "fixture written"
        );
        Ok(path)
    }
}

fn text(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

fn num(value: i64) -> CellValue {
    CellValue::Int(value)
}

fn id_value_sheet(name: &'static str, rows: [(&str, &str); 2]) -> SheetFixture {
    SheetFixture::new(name)
        .row(1, text(&["ID", "Value"]))
        .row(2, text(&[rows[0].0, rows[0].1]))
        .row(3, text(&[rows[1].0, rows[1].1]))
}

/// `test.xlsx`: one sheet "Sheet1" with ID/Value, 1/10, 2/20 as text
pub fn single_sheet() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: SINGLE_SHEET_FILE,
        sheets: vec![id_value_sheet("Sheet1", [("1", "10"), ("2", "20")])],
    }
}

/// `test_multi.xlsx`: "Sheet1" as in [`single_sheet`], then "Sheet2" with
/// ID/Value, 3/30, 4/40
pub fn multi_sheet() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: MULTI_SHEET_FILE,
        sheets: vec![
            id_value_sheet("Sheet1", [("1", "10"), ("2", "20")]),
            id_value_sheet("Sheet2", [("3", "30"), ("4", "40")]),
        ],
    }
}

const CATEGORY_HEADER: [&str; 4] = ["Category", "Subcategory", "Value1", "Value2"];

fn category_row(category: &str, subcategory: &str, v1: i64, v2: i64) -> Vec<CellValue> {
    vec![category.into(), subcategory.into(), num(v1), num(v2)]
}

/// Header on the first row followed by two data rows
pub fn excel_normal() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-normal.xlsx",
        sheets: vec![SheetFixture::new("Test Sheet")
            .row(1, text(&CATEGORY_HEADER))
            .row(2, category_row("Category A", "", 10, 20))
            .row(3, category_row("Category B", "", 30, 40))],
    }
}

/// Banner text on row 1, header pushed down to row 4
pub fn excel_offset() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-offset.xlsx",
        sheets: vec![SheetFixture::new("Test Sheet")
            .row(1, text(&["This is not the header"]))
            .row(4, text(&CATEGORY_HEADER))
            .row(5, category_row("Category A", "", 10, 20))],
    }
}

/// Nested parent/child rows with a text value in a numeric column
pub fn excel_mixed() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-mixed.xlsx",
        sheets: vec![SheetFixture::new("Test Sheet")
            .row(1, text(&["Parent", "Child", "Value1", "Value2"]))
            .row(2, category_row("Parent", "Child", 30, 40))
            .row(
                3,
                vec!["Parent".into(), "Child2".into(), "Not a number".into(), num(50)],
            )],
    }
}

/// Three sheets sharing one header
pub fn multi_consistent() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-multi-consistent.xlsx",
        sheets: vec![
            SheetFixture::new("Sheet 1")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category A", "Subcat A1", 10, 20))
                .row(3, category_row("Category A", "Subcat A2", 15, 25)),
            SheetFixture::new("Sheet 2")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category B", "Subcat B1", 30, 40))
                .row(3, category_row("Category B", "Subcat B2", 35, 45)),
            SheetFixture::new("Sheet 3")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category C", "Subcat C1", 50, 60)),
        ],
    }
}

/// Three sheets whose headers disagree: reordered columns, then renamed ones
pub fn multi_inconsistent() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-multi-inconsistent.xlsx",
        sheets: vec![
            SheetFixture::new("Sheet 1")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category A", "Subcat A1", 10, 20)),
            SheetFixture::new("Sheet 2")
                .row(1, text(&["Category", "Value1", "Subcategory", "Value2"]))
                .row(
                    2,
                    vec!["Category B".into(), num(30), "Subcat B1".into(), num(40)],
                ),
            SheetFixture::new("Sheet 3")
                .row(1, text(&["Group", "Subcategory", "Score1", "Score2"]))
                .row(2, category_row("Category C", "Subcat C1", 50, 60)),
        ],
    }
}

/// Valid sheets interleaved with an empty sheet and a two-column sheet
pub fn multi_mixed() -> Fixture {
    Fixture {
        dir: RESOURCES_DIR,
        file_name: "test-excel-multi-mixed.xlsx",
        sheets: vec![
            SheetFixture::new("Valid Sheet 1")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category A", "Subcat A1", 10, 20)),
            SheetFixture::new("Empty Sheet"),
            SheetFixture::new("Valid Sheet 2")
                .row(1, text(&CATEGORY_HEADER))
                .row(2, category_row("Category C", "Subcat C1", 50, 60)),
            SheetFixture::new("Invalid Sheet - Fewer Columns")
                .row(1, text(&["Category", "Value1"]))
                .row(2, vec!["Category D".into(), num(70)]),
        ],
    }
}

/// `etc/report.xlsx`: the sample report, a "Sample Data" sheet with three
/// categories and no subcategories
pub fn report_sample() -> Fixture {
    Fixture {
        dir: REPORT_DIR,
        file_name: REPORT_SAMPLE_FILE,
        sheets: vec![SheetFixture::new("Sample Data")
            .row(1, text(&CATEGORY_HEADER))
            .row(2, category_row("Category A", "", 10, 20))
            .row(3, category_row("Category B", "", 30, 40))
            .row(4, category_row("Category C", "", 50, 60))],
    }
}

/// Single-sheet parser samples
pub fn samples() -> Vec<Fixture> {
    vec![excel_normal(), excel_offset(), excel_mixed()]
}

/// Multi-sheet parser samples
pub fn multi_samples() -> Vec<Fixture> {
    vec![multi_consistent(), multi_inconsistent(), multi_mixed()]
}

/// Every test resource fixture, in generation order. The sample report lives
/// outside the resources directory and is not part of it.
pub fn catalog() -> Vec<Fixture> {
    let mut all = vec![single_sheet(), multi_sheet()];
    all.extend(samples());
    all.extend(multi_samples());
    all
}

/// Write `test.xlsx` under `root`
pub fn generate_single_sheet(root: impl AsRef<Path>) -> Result<PathBuf> {
    single_sheet().generate(root)
}

/// Write `test_multi.xlsx` under `root`
pub fn generate_multi_sheet(root: impl AsRef<Path>) -> Result<PathBuf> {
    multi_sheet().generate(root)
}

/// Write `etc/report.xlsx` under `root`
pub fn generate_report_sample(root: impl AsRef<Path>) -> Result<PathBuf> {
    report_sample().generate(root)
}

/// Write each fixture under `root`, stopping at the first failure
pub fn generate_each(root: impl AsRef<Path>, fixtures: &[Fixture]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    fixtures.iter().map(|f| f.generate(root)).collect()
}

/// Create the resources directory if needed, then write the whole catalog
pub fn generate_all(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let dir = root.join(RESOURCES_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        tracing::info!(dir = %dir.display(), "created resources directory");
    }
    generate_each(root, &catalog())
}
