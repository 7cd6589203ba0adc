//! Reader for checking generated fixtures
//!
//! Loads a package written by [`crate::workbook::Workbook::save`] (or any
//! XLSX file) back into sheet names and typed cells through `calamine`, an
//! XLSX parser independent of the writer in [`crate::xlsx`].

use crate::error::{FixtureError, Result};
use crate::types::{CellRef, CellValue};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Workbook opened for reading
pub struct WorkbookReader {
    workbook: Xlsx<BufReader<File>>,
    sheet_names: Vec<String>,
}

/// Cells of one sheet as read back from a package
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    cells: BTreeMap<CellRef, CellValue>,
}

impl SheetData {
    /// Value at a 1-based (row, column), if populated
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&CellRef { row, col })
    }

    /// Text of a string cell at a 1-based (row, column)
    pub fn text(&self, row: u32, col: u32) -> Option<&str> {
        self.cell(row, col).and_then(CellValue::as_str)
    }

    /// Populated cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &CellValue)> {
        self.cells.iter().map(|(cell, value)| (*cell, value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row values as strings from column 1 up to the last populated column
    pub fn row_strings(&self, row: u32) -> Vec<String> {
        let last = self
            .cells
            .keys()
            .filter(|c| c.row == row)
            .map(|c| c.col)
            .max()
            .unwrap_or(0);
        (1..=last)
            .map(|col| self.cell(row, col).map(CellValue::as_string).unwrap_or_default())
            .collect()
    }
}

impl WorkbookReader {
    /// Open an XLSX file and load its sheet list
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let workbook: Xlsx<_> = open_workbook(path.as_ref())?;
        let sheet_names = workbook.sheet_names();

        tracing::debug!(
            path = %path.as_ref().display(),
            sheets = ?sheet_names,
            "opened workbook"
        );

        Ok(WorkbookReader {
            workbook,
            sheet_names,
        })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Read every populated cell of the named sheet
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<SheetData> {
        if !self.sheet_names.iter().any(|name| name == sheet_name) {
            return Err(FixtureError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available: self.sheet_names.join(", "),
            });
        }

        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(SheetData {
            name: sheet_name.to_string(),
            cells: range_cells(&range)?,
        })
    }

    /// Read every sheet in workbook order
    pub fn read_all(&mut self) -> Result<Vec<SheetData>> {
        let names = self.sheet_names.clone();
        names.iter().map(|name| self.read_sheet(name)).collect()
    }
}

/// Non-empty cells of a range keyed by their 1-based position
fn range_cells(range: &Range<Data>) -> Result<BTreeMap<CellRef, CellValue>> {
    let mut cells = BTreeMap::new();
    let Some((start_row, start_col)) = range.start() else {
        return Ok(cells);
    };

    for (row, col, data) in range.cells() {
        let value = data_to_cell_value(data);
        if value.is_empty() {
            continue;
        }
        let cell = CellRef::new(start_row + row as u32 + 1, start_col + col as u32 + 1)?;
        cells.insert(cell, value);
    }
    Ok(cells)
}

/// Convert calamine Data to our CellValue. Whole numbers come back as
/// integers since XLSX stores every number as a double.
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            CellValue::Int(*f as i64)
        }
        Data::Float(f) => CellValue::Float(*f),
        other => CellValue::String(other.to_string()),
    }
}
