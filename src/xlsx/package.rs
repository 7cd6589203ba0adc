//! Fixed OOXML package parts: content types, relationships, styles and
//! document properties

use super::xml_writer::XmlWriter;
use crate::error::Result;
use crate::workbook::Workbook;
use chrono::{DateTime, Utc};
use std::io::Write;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Application name recorded in `docProps/app.xml` and as document creator
pub const APPLICATION: &str = "sheetfixtures";

/// Path of the worksheet part for a 1-based sheet position
pub fn worksheet_part(position: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", position)
}

pub fn write_content_types<W: Write>(sheet_count: usize, w: &mut XmlWriter<W>) -> Result<()> {
    w.declaration()?;
    w.start_element("Types")?;
    w.attribute(
        "xmlns",
        "http://schemas.openxmlformats.org/package/2006/content-types",
    )?;
    w.close_start_tag()?;

    default_type(w, "rels", "application/vnd.openxmlformats-package.relationships+xml")?;
    default_type(w, "xml", "application/xml")?;

    override_type(
        w,
        "/xl/workbook.xml",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
    )?;
    for position in 1..=sheet_count {
        override_type(
            w,
            &format!("/{}", worksheet_part(position)),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml",
        )?;
    }
    override_type(
        w,
        "/xl/styles.xml",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml",
    )?;
    override_type(
        w,
        "/xl/sharedStrings.xml",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml",
    )?;
    override_type(
        w,
        "/docProps/core.xml",
        "application/vnd.openxmlformats-package.core-properties+xml",
    )?;
    override_type(
        w,
        "/docProps/app.xml",
        "application/vnd.openxmlformats-officedocument.extended-properties+xml",
    )?;

    w.end_element("Types")?;
    w.flush()
}

fn default_type<W: Write>(w: &mut XmlWriter<W>, extension: &str, content_type: &str) -> Result<()> {
    w.start_element("Default")?;
    w.attribute("Extension", extension)?;
    w.attribute("ContentType", content_type)?;
    w.close_empty()
}

fn override_type<W: Write>(w: &mut XmlWriter<W>, part: &str, content_type: &str) -> Result<()> {
    w.start_element("Override")?;
    w.attribute("PartName", part)?;
    w.attribute("ContentType", content_type)?;
    w.close_empty()
}

fn relationship<W: Write>(w: &mut XmlWriter<W>, id: usize, kind: &str, target: &str) -> Result<()> {
    w.start_element("Relationship")?;
    w.attribute("Id", &format!("rId{}", id))?;
    w.attribute("Type", kind)?;
    w.attribute("Target", target)?;
    w.close_empty()
}

pub fn write_root_rels<W: Write>(w: &mut XmlWriter<W>) -> Result<()> {
    w.declaration()?;
    w.start_element("Relationships")?;
    w.attribute("xmlns", PKG_REL_NS)?;
    w.close_start_tag()?;
    relationship(
        w,
        1,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        "xl/workbook.xml",
    )?;
    relationship(
        w,
        2,
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
        "docProps/core.xml",
    )?;
    relationship(
        w,
        3,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties",
        "docProps/app.xml",
    )?;
    w.end_element("Relationships")?;
    w.flush()
}

/// `xl/workbook.xml`; sheet N is bound to relationship `rIdN`
pub fn write_workbook_xml<W: Write>(workbook: &Workbook, w: &mut XmlWriter<W>) -> Result<()> {
    w.declaration()?;
    w.start_element("workbook")?;
    w.attribute("xmlns", MAIN_NS)?;
    w.attribute("xmlns:r", REL_NS)?;
    w.close_start_tag()?;

    w.start_element("sheets")?;
    w.close_start_tag()?;
    for (idx, name) in workbook.sheet_names().into_iter().enumerate() {
        let position = idx as u32 + 1;
        w.start_element("sheet")?;
        w.attribute("name", name)?;
        w.attribute_int("sheetId", position)?;
        w.attribute("r:id", &format!("rId{}", position))?;
        w.close_empty()?;
    }
    w.end_element("sheets")?;

    w.end_element("workbook")?;
    w.flush()
}

pub fn write_workbook_rels<W: Write>(sheet_count: usize, w: &mut XmlWriter<W>) -> Result<()> {
    w.declaration()?;
    w.start_element("Relationships")?;
    w.attribute("xmlns", PKG_REL_NS)?;
    w.close_start_tag()?;

    for position in 1..=sheet_count {
        relationship(
            w,
            position,
            &format!("{}/worksheet", REL_NS),
            &format!("worksheets/sheet{}.xml", position),
        )?;
    }
    relationship(w, sheet_count + 1, &format!("{}/styles", REL_NS), "styles.xml")?;
    relationship(
        w,
        sheet_count + 2,
        &format!("{}/sharedStrings", REL_NS),
        "sharedStrings.xml",
    )?;

    w.end_element("Relationships")?;
    w.flush()
}

/// Single default cell format; fixtures carry no styling
pub fn write_styles<W: Write>(w: &mut XmlWriter<W>) -> Result<()> {
    w.declaration()?;
    w.write_str(
        r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="1"><font><sz val="11"/><name val="Calibri"/><family val="2"/></font></fonts>
<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>
<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
</styleSheet>"#,
    )?;
    w.flush()
}

pub fn write_app_props<W: Write>(workbook: &Workbook, w: &mut XmlWriter<W>) -> Result<()> {
    let names = workbook.sheet_names();

    w.declaration()?;
    w.start_element("Properties")?;
    w.attribute(
        "xmlns",
        "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
    )?;
    w.attribute(
        "xmlns:vt",
        "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
    )?;
    w.close_start_tag()?;
    w.text_element("Application", APPLICATION)?;

    w.start_element("TitlesOfParts")?;
    w.close_start_tag()?;
    w.start_element("vt:vector")?;
    w.attribute_int("size", names.len() as u32)?;
    w.attribute("baseType", "lpstr")?;
    w.close_start_tag()?;
    for name in names {
        w.text_element("vt:lpstr", name)?;
    }
    w.end_element("vt:vector")?;
    w.end_element("TitlesOfParts")?;

    w.end_element("Properties")?;
    w.flush()
}

pub fn write_core_props<W: Write>(created: DateTime<Utc>, w: &mut XmlWriter<W>) -> Result<()> {
    let timestamp = created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    w.declaration()?;
    w.start_element("cp:coreProperties")?;
    w.attribute(
        "xmlns:cp",
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    )?;
    w.attribute("xmlns:dc", "http://purl.org/dc/elements/1.1/")?;
    w.attribute("xmlns:dcterms", "http://purl.org/dc/terms/")?;
    w.attribute("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")?;
    w.close_start_tag()?;

    w.text_element("dc:creator", APPLICATION)?;
    for element in ["dcterms:created", "dcterms:modified"] {
        w.start_element(element)?;
        w.attribute("xsi:type", "dcterms:W3CDTF")?;
        w.close_start_tag()?;
        w.write_str(&timestamp)?;
        w.end_element(element)?;
    }

    w.end_element("cp:coreProperties")?;
    w.flush()
}
