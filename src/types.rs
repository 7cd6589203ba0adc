//! Type definitions for fixture cell data

use crate::error::{FixtureError, Result};
use std::fmt;

/// Largest row index Excel accepts (1-based)
pub const MAX_ROW: u32 = 1_048_576;
/// Largest column index Excel accepts (1-based, column XFD)
pub const MAX_COL: u32 = 16_384;

/// Represents a single cell value in a fixture worksheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// String value, written through the shared strings table
    String(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
}

impl CellValue {
    /// Convert cell value to string
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::String(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
        }
    }

    /// Borrow the text of a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check if cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric cells only; text that looks like a number stays text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// A 1-based (row, column) cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub(crate) row: u32,
    pub(crate) col: u32,
}

impl CellRef {
    /// Create a coordinate, rejecting anything outside the sheet grid
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row == 0 || col == 0 || row > MAX_ROW || col > MAX_COL {
            return Err(FixtureError::InvalidCell(format!(
                "({}, {}) is outside 1..={} rows, 1..={} columns",
                row, col, MAX_ROW, MAX_COL
            )));
        }
        Ok(CellRef { row, col })
    }

    /// Row index (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index (1-based)
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Parse an A1-style reference such as "B3" or "AA10"
    pub fn parse(reference: &str) -> Result<Self> {
        let split = reference
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(reference.len());
        let (letters, digits) = reference.split_at(split);

        let digits_only = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        if letters.is_empty() || !digits_only {
            return Err(FixtureError::InvalidCell(reference.to_string()));
        }

        let mut col = 0u32;
        for ch in letters.chars() {
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1))
                .ok_or_else(|| FixtureError::InvalidCell(reference.to_string()))?;
        }

        let row = digits
            .parse::<u32>()
            .map_err(|_| FixtureError::InvalidCell(reference.to_string()))?;

        Self::new(row, col)
    }

    /// Get Excel-style cell reference (e.g., "A1", "B2")
    pub fn reference(&self) -> String {
        let mut out = Vec::with_capacity(10);
        push_column_letters(&mut out, self.col);
        let mut num_buffer = itoa::Buffer::new();
        out.extend_from_slice(num_buffer.format(self.row).as_bytes());
        // Only ASCII letters and digits are pushed
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference())
    }
}

/// Append the column letters for a 1-based column index (1 -> A, 27 -> AA).
/// Seven letters cover any `u32`.
pub(crate) fn push_column_letters(out: &mut Vec<u8>, col: u32) {
    let mut letters = [0u8; 7];
    let mut len = 0;
    let mut col = col;

    while col > 0 {
        col -= 1;
        letters[len] = b'A' + (col % 26) as u8;
        len += 1;
        col /= 26;
    }

    for &b in letters[..len].iter().rev() {
        out.push(b);
    }
}
