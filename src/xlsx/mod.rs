//! XLSX package writer
//!
//! Serializes a materialized [`Workbook`] into an OOXML package, streaming each
//! part through the `s-zip` compressor:
//! - one `xl/worksheets/sheetN.xml` per sheet, in workbook order
//! - a shared strings table built while the worksheets are rendered
//! - the fixed package parts (content types, relationships, styles, properties)

pub mod package;
pub mod shared_strings;
pub mod worksheet;
pub mod xml_writer;

use crate::error::{FixtureError, Result};
use crate::workbook::Workbook;
use s_zip::{SZipError, StreamingZipWriter};
use shared_strings::SharedStrings;
use std::fs::File;
use std::path::Path;
use xml_writer::XmlWriter;

/// Deflate level used for every entry
pub const COMPRESSION_LEVEL: u32 = 6;

/// Write `workbook` to `path`, replacing any existing file
pub fn write_workbook(workbook: &Workbook, path: &Path) -> Result<()> {
    // A package needs at least one worksheet to open in Excel
    if workbook.sheets().is_empty() {
        return Err(FixtureError::WriteError("workbook has no sheets".to_string()));
    }

    let mut zip = PackageWriter::create(path)?;
    let mut shared_strings = SharedStrings::new();

    for (idx, sheet) in workbook.sheets().iter().enumerate() {
        zip.start_entry(&package::worksheet_part(idx + 1))?;
        worksheet::write_worksheet(sheet, &mut shared_strings, &mut zip.xml())?;
        tracing::debug!(
            sheet = sheet.name(),
            cells = sheet.len(),
            "serialized worksheet"
        );
    }

    let sheet_count = workbook.sheets().len();

    zip.start_entry("[Content_Types].xml")?;
    package::write_content_types(sheet_count, &mut zip.xml())?;

    zip.start_entry("_rels/.rels")?;
    package::write_root_rels(&mut zip.xml())?;

    zip.start_entry("docProps/app.xml")?;
    package::write_app_props(workbook, &mut zip.xml())?;

    zip.start_entry("docProps/core.xml")?;
    package::write_core_props(chrono::Utc::now(), &mut zip.xml())?;

    zip.start_entry("xl/workbook.xml")?;
    package::write_workbook_xml(workbook, &mut zip.xml())?;

    zip.start_entry("xl/_rels/workbook.xml.rels")?;
    package::write_workbook_rels(sheet_count, &mut zip.xml())?;

    zip.start_entry("xl/styles.xml")?;
    package::write_styles(&mut zip.xml())?;

    zip.start_entry("xl/sharedStrings.xml")?;
    shared_strings.write_xml(&mut zip.xml())?;

    zip.finish()?;
    tracing::debug!(
        path = %path.display(),
        sheets = sheet_count,
        shared_strings = shared_strings.count(),
        "workbook saved"
    );
    Ok(())
}

/// Thin wrapper over the streaming ZIP writer that maps its errors
struct PackageWriter {
    zip: StreamingZipWriter<File>,
}

impl PackageWriter {
    /// Missing directories and permission failures come back as `IoError`
    fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let zip = StreamingZipWriter::from_writer_with_compression(file, COMPRESSION_LEVEL)
            .map_err(|e| zip_error("Failed to create ZIP", e))?;
        Ok(PackageWriter { zip })
    }

    fn start_entry(&mut self, name: &str) -> Result<()> {
        self.zip
            .start_entry(name)
            .map_err(|e| zip_error(&format!("Failed to start entry {}", name), e))
    }

    /// XML writer feeding the current entry
    fn xml(&mut self) -> XmlWriter<&mut Self> {
        XmlWriter::new(self)
    }

    fn finish(self) -> Result<()> {
        self.zip
            .finish()
            .map_err(|e| zip_error("Failed to finish ZIP", e))?;
        Ok(())
    }
}

fn zip_error(context: &str, err: SZipError) -> FixtureError {
    match err {
        SZipError::Io(e) => FixtureError::IoError(e),
        other => FixtureError::WriteError(format!("{}: {}", context, other)),
    }
}

impl std::io::Write for PackageWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.zip
            .write_data(buf)
            .map_err(|e| match e {
                SZipError::Io(e) => e,
                other => std::io::Error::other(other.to_string()),
            })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
