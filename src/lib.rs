//! # sheetfixtures
//!
//! Generates the static XLSX workbooks that the report parser tests read as
//! input.
//!
//! - **Workbook model**: ordered named sheets of sparse 1-based cells
//! - **XLSX writer**: shared strings, worksheets and package parts streamed
//!   through `s-zip`
//! - **Reader**: loads a written package back through `calamine` for
//!   verification
//! - **Fixture catalog**: the literal workbooks and where they are written
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheetfixtures::Workbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workbook = Workbook::new();
//! let sheet = workbook.rename_sheet(0, "Sheet1")?;
//! sheet.set_cell(1, 1, "ID")?;
//! sheet.set_cell(1, 2, "Value")?;
//! workbook.save("src/test/resources/test.xlsx")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod reader;
pub mod types;
pub mod workbook;
pub mod xlsx;

pub use error::{FixtureError, Result};
pub use fixtures::{Fixture, SheetFixture};
pub use reader::{SheetData, WorkbookReader};
pub use types::{CellRef, CellValue};
pub use workbook::{Sheet, Workbook};
