//! Memory snapshots
//!
//! Captures a window of VM memory and renders it as XML:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <memory start="0" end="3">
//!   <cell addr="0" value="232"/>
//!   <cell addr="1" value="0"/>
//!   <cell addr="2" value="28"/>
//! </memory>
//! ```

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use uvm_spec::{Address, Word};
use crate::error::{Result, RuntimeError};
use crate::memory::Memory;

/// Default snapshot window
pub const DEFAULT_RANGE: (i64, i64) = (0, 64);

/// Values of every address in `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub start: Address,
    pub end: Address,
    pub cells: Vec<(Address, Word)>,
}

impl MemorySnapshot {
    /// Capture `[start, end)`. An empty or inverted range yields no cells.
    pub fn capture(memory: &Memory, start: i64, end: i64) -> Result<Self> {
        let start = Memory::checked_address(start)?;
        let end = Memory::checked_address(end)?;

        let cells = (start..end.max(start)).map(|addr| (addr, memory.read(addr))).collect();

        Ok(Self { start, end, cells })
    }

    /// Render as an XML document
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let start = self.start.to_string();
        let end = self.end.to_string();
        let mut root = BytesStart::new("memory");
        root.push_attribute(("start", start.as_str()));
        root.push_attribute(("end", end.as_str()));
        writer.write_event(Event::Start(root))?;

        for &(addr, value) in &self.cells {
            let addr = addr.to_string();
            let value = value.to_string();
            let mut cell = BytesStart::new("cell");
            cell.push_attribute(("addr", addr.as_str()));
            cell.push_attribute(("value", value.as_str()));
            writer.write_event(Event::Empty(cell))?;
        }

        writer.write_event(Event::End(BytesEnd::new("memory")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| RuntimeError::Other(e.to_string()))
    }

    /// Write the XML document to a file
    pub fn write_xml(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut xml = self.to_xml()?;
        xml.push('\n');
        fs::write(path, xml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_defaults_to_zero() {
        let mut mem = Memory::new();
        mem.write(1, 5);
        let snap = MemorySnapshot::capture(&mem, 0, 3).unwrap();
        assert_eq!(snap.cells, vec![(0, 0), (1, 5), (2, 0)]);
    }

    #[test]
    fn test_capture_empty_range() {
        let mem = Memory::new();
        assert!(MemorySnapshot::capture(&mem, 4, 4).unwrap().cells.is_empty());
        assert!(MemorySnapshot::capture(&mem, 9, 2).unwrap().cells.is_empty());
    }

    #[test]
    fn test_capture_negative_bounds() {
        let mem = Memory::new();
        assert!(matches!(
            MemorySnapshot::capture(&mem, -1, 4),
            Err(RuntimeError::InvalidAddress { address: -1 })
        ));
        assert!(MemorySnapshot::capture(&mem, 0, -4).is_err());
    }

    #[test]
    fn test_to_xml() {
        let mut mem = Memory::new();
        mem.write(1, 7);
        let xml = MemorySnapshot::capture(&mem, 0, 2).unwrap().to_xml().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<memory start=\"0\" end=\"2\">"));
        assert!(xml.contains("<cell addr=\"0\" value=\"0\"/>"));
        assert!(xml.contains("<cell addr=\"1\" value=\"7\"/>"));
        assert!(xml.trim_end().ends_with("</memory>"));
        assert_eq!(xml.matches("<cell ").count(), 2);
    }

    #[test]
    fn test_to_xml_large_values() {
        let mut mem = Memory::new();
        mem.write(0, u32::MAX);
        let xml = MemorySnapshot::capture(&mem, 0, 1).unwrap().to_xml().unwrap();
        assert!(xml.contains("value=\"4294967295\""));
    }
}
