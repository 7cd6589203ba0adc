//! Shared strings table for string deduplication

use super::xml_writer::XmlWriter;
use crate::error::Result;
use indexmap::IndexSet;
use std::io::Write;

/// Shared strings table that deduplicates strings across the workbook.
/// Indices follow first-insertion order.
#[derive(Debug, Default)]
pub struct SharedStrings {
    strings: IndexSet<String>,
    references: u32,
}

impl SharedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string reference and get its index
    pub fn add_string(&mut self, s: &str) -> u32 {
        self.references += 1;
        if let Some(index) = self.strings.get_index_of(s) {
            return index as u32;
        }
        self.strings.insert_full(s.to_string()).0 as u32
    }

    /// Number of unique strings
    pub fn count(&self) -> usize {
        self.strings.len()
    }

    /// Write `xl/sharedStrings.xml`
    pub fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.declaration()?;

        writer.start_element("sst")?;
        writer.attribute(
            "xmlns",
            "http://schemas.openxmlformats.org/spreadsheetml/2006/main",
        )?;
        writer.attribute_int("count", self.references)?;
        writer.attribute_int("uniqueCount", self.strings.len() as u32)?;
        writer.close_start_tag()?;

        for s in &self.strings {
            writer.start_element("si")?;
            writer.close_start_tag()?;
            if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
                writer.start_element("t")?;
                writer.attribute("xml:space", "preserve")?;
                writer.close_start_tag()?;
                writer.write_escaped(s)?;
                writer.end_element("t")?;
            } else {
                writer.text_element("t", s)?;
            }
            writer.end_element("si")?;
        }

        writer.end_element("sst")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_strings() {
        let mut ss = SharedStrings::new();

        let idx1 = ss.add_string("ID");
        let idx2 = ss.add_string("Value");
        let idx3 = ss.add_string("ID");

        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(idx3, 0);
        assert_eq!(ss.count(), 2);
    }

    #[test]
    fn test_write_xml_counts() {
        let mut ss = SharedStrings::new();
        ss.add_string("ID");
        ss.add_string("ID");
        ss.add_string("");

        let mut output = Vec::new();
        ss.write_xml(&mut XmlWriter::new(&mut output)).unwrap();
        let xml = String::from_utf8(output).unwrap();

        assert!(xml.contains("count=\"3\" uniqueCount=\"2\""));
        assert!(xml.contains("<si><t>ID</t></si><si><t></t></si>"));
    }
}
