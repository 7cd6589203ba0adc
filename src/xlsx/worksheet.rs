//! Worksheet XML rendering

use super::shared_strings::SharedStrings;
use super::xml_writer::XmlWriter;
use crate::error::Result;
use crate::types::{push_column_letters, CellValue};
use crate::workbook::Sheet;
use std::io::Write;

/// Render one sheet as `xl/worksheets/sheetN.xml`. Text cells are added to
/// `shared_strings` and referenced by index.
pub fn write_worksheet<W: Write>(
    sheet: &Sheet,
    shared_strings: &mut SharedStrings,
    writer: &mut XmlWriter<W>,
) -> Result<()> {
    writer.declaration()?;
    writer.start_element("worksheet")?;
    writer.attribute(
        "xmlns",
        "http://schemas.openxmlformats.org/spreadsheetml/2006/main",
    )?;
    writer.attribute(
        "xmlns:r",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    )?;
    writer.close_start_tag()?;

    writer.start_element("dimension")?;
    let dimension = match sheet.dimension() {
        Some((top_left, bottom_right)) if top_left == bottom_right => top_left.reference(),
        Some((top_left, bottom_right)) => format!("{}:{}", top_left, bottom_right),
        None => "A1".to_string(),
    };
    writer.attribute("ref", &dimension)?;
    writer.close_empty()?;

    if sheet.is_empty() {
        writer.start_element("sheetData")?;
        writer.close_empty()?;
    } else {
        writer.start_element("sheetData")?;
        writer.close_start_tag()?;
        write_rows(sheet, shared_strings, writer)?;
        writer.end_element("sheetData")?;
    }

    writer.end_element("worksheet")?;
    writer.flush()
}

fn write_rows<W: Write>(
    sheet: &Sheet,
    shared_strings: &mut SharedStrings,
    writer: &mut XmlWriter<W>,
) -> Result<()> {
    let mut num_buffer = itoa::Buffer::new();
    let mut cell_ref = Vec::with_capacity(16);
    let mut open_row: Option<u32> = None;

    for (cell, value) in sheet.cells() {
        if open_row != Some(cell.row) {
            if open_row.is_some() {
                writer.end_element("row")?;
            }
            writer.start_element("row")?;
            writer.attribute_int("r", cell.row)?;
            writer.close_start_tag()?;
            open_row = Some(cell.row);
        }

        cell_ref.clear();
        push_column_letters(&mut cell_ref, cell.col);
        cell_ref.extend_from_slice(num_buffer.format(cell.row).as_bytes());

        writer.write_raw(b"<c r=\"")?;
        writer.write_raw(&cell_ref)?;
        match value {
            CellValue::String(s) => {
                let index = shared_strings.add_string(s);
                writer.write_raw(b"\" t=\"s\"><v>")?;
                writer.write_str(num_buffer.format(index))?;
                writer.write_raw(b"</v></c>")?;
            }
            CellValue::Int(i) => {
                writer.write_raw(b"\"><v>")?;
                writer.write_str(num_buffer.format(*i))?;
                writer.write_raw(b"</v></c>")?;
            }
            CellValue::Float(f) => {
                writer.write_raw(b"\"><v>")?;
                writer.write_str(&f.to_string())?;
                writer.write_raw(b"</v></c>")?;
            }
            CellValue::Empty => writer.write_raw(b"\"/>")?,
        }
    }

    if open_row.is_some() {
        writer.end_element("row")?;
    }
    Ok(())
}
