//! In-memory workbook model
//!
//! A [`Workbook`] is an ordered list of named [`Sheet`]s, each a sparse grid of
//! cells addressed by 1-based (row, column). The whole workbook is materialized
//! before [`Workbook::save`] serializes it in one pass.

use crate::error::{FixtureError, Result};
use crate::types::{CellRef, CellValue};
use std::collections::BTreeMap;
use std::path::Path;

/// Name given to the sheet created by [`Workbook::new`]
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A named 2-D grid of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<CellRef, CellValue>,
}

impl Sheet {
    fn new(name: String) -> Self {
        Sheet {
            name,
            cells: BTreeMap::new(),
        }
    }

    /// Sheet name as shown on the tab
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the value at a 1-based (row, column). Writing [`CellValue::Empty`]
    /// clears the cell. NaN and infinite floats have no XLSX representation
    /// and are rejected.
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<CellValue>) -> Result<()> {
        let cell = CellRef::new(row, col)?;
        match value.into() {
            CellValue::Empty => {
                self.cells.remove(&cell);
            }
            CellValue::Float(f) if !f.is_finite() => {
                return Err(FixtureError::InvalidCell(format!(
                    "{}: {} is not a finite number",
                    cell, f
                )));
            }
            value => {
                self.cells.insert(cell, value);
            }
        }
        Ok(())
    }

    /// Write `values` left to right starting at column 1 of `row`
    pub fn set_row<I, V>(&mut self, row: u32, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for (idx, value) in values.into_iter().enumerate() {
            self.set_cell(row, idx as u32 + 1, value)?;
        }
        Ok(())
    }

    /// Value at a 1-based (row, column), if populated
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&CellRef { row, col })
    }

    /// Populated cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &CellValue)> {
        self.cells.iter().map(|(cell, value)| (*cell, value))
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of the populated cells as (top-left, bottom-right)
    pub fn dimension(&self) -> Option<(CellRef, CellRef)> {
        let first = self.cells.keys().next()?;
        let last = self.cells.keys().next_back()?;
        let (min_col, max_col) = self
            .cells
            .keys()
            .fold((u32::MAX, 0), |(lo, hi), c| (lo.min(c.col), hi.max(c.col)));

        Some((
            CellRef {
                row: first.row,
                col: min_col,
            },
            CellRef {
                row: last.row,
                col: max_col,
            },
        ))
    }
}

/// Ordered collection of sheets serialized together as one file
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a workbook holding one default sheet named "Sheet"
    pub fn new() -> Self {
        Workbook {
            sheets: vec![Sheet::new(DEFAULT_SHEET_NAME.to_string())],
        }
    }

    /// Create a workbook with no sheets
    pub fn empty() -> Self {
        Workbook { sheets: Vec::new() }
    }

    /// The first sheet, which Excel opens on
    pub fn active_mut(&mut self) -> Result<&mut Sheet> {
        self.sheets
            .first_mut()
            .ok_or_else(|| FixtureError::SheetNotFound {
                sheet: "<active>".to_string(),
                available: String::new(),
            })
    }

    /// Append a new sheet after the existing ones
    pub fn create_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        self.check_new_name(name, None)?;
        self.sheets.push(Sheet::new(name.to_string()));
        let idx = self.sheets.len() - 1;
        Ok(&mut self.sheets[idx])
    }

    /// Rename the sheet at `index`
    pub fn rename_sheet(&mut self, index: usize, name: &str) -> Result<&mut Sheet> {
        if index >= self.sheets.len() {
            return Err(FixtureError::SheetNotFound {
                sheet: format!("#{}", index),
                available: self.sheet_names().join(", "),
            });
        }
        self.check_new_name(name, Some(index))?;
        let sheet = &mut self.sheets[index];
        sheet.name = name.to_string();
        Ok(sheet)
    }

    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| FixtureError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheet_names().join(", "),
            })
    }

    /// Sheets in workbook order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Serialize the workbook as an XLSX package at `path`, replacing any
    /// existing file. The parent directory must already exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::xlsx::write_workbook(self, path.as_ref())
    }

    fn check_new_name(&self, name: &str, replacing: Option<usize>) -> Result<()> {
        validate_sheet_name(name)?;
        let lowered = name.to_lowercase();
        let clash = self
            .sheets
            .iter()
            .enumerate()
            .any(|(idx, s)| Some(idx) != replacing && s.name.to_lowercase() == lowered);
        if clash {
            return Err(FixtureError::DuplicateSheet(name.to_string()));
        }
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_sheet_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.chars().count() > MAX_SHEET_NAME_LEN {
        Some("name is longer than 31 characters")
    } else if name.contains(FORBIDDEN_SHEET_CHARS) {
        Some("name contains one of : \\ / ? * [ ]")
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("name starts or ends with an apostrophe")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FixtureError::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
