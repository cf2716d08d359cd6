//! Main assembler logic

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;
use uvm_spec::Program;
use crate::encoder::{encode, AssembledInstruction};
use crate::error::Result;
use crate::parser::{parse_source, SymbolicInstruction};

/// Output of one assembly pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// One entry per source instruction, in order
    pub instructions: Vec<AssembledInstruction>,

    /// Encoded words
    pub program: Program,
}

impl Assembly {
    /// Render the intermediate representation, one line per instruction
    pub fn ir_listing(&self) -> String {
        let mut out = String::new();
        for (i, instr) in self.instructions.iter().enumerate() {
            let _ = match instr.operand {
                Some(b) => writeln!(out, "{:02}: op={}, A={}, B={}", i, instr.opcode, instr.tag, b),
                None => writeln!(out, "{:02}: op={}, A={}", i, instr.opcode, instr.tag),
            };
        }
        out
    }
}

/// Summary of a written program file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyReport {
    pub instruction_count: usize,
    pub byte_size: u64,
}

impl std::fmt::Display for AssemblyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assembled instructions: {}", self.instruction_count)?;
        write!(f, "Binary size: {} bytes", self.byte_size)
    }
}

/// Assemble symbolic instructions into a program.
///
/// Fails on the first invalid instruction; nothing is produced in that case.
pub fn assemble(source: &[SymbolicInstruction]) -> Result<Assembly> {
    let mut instructions = Vec::with_capacity(source.len());

    for (index, instr) in source.iter().enumerate() {
        let assembled = encode(index, instr)?;
        debug!(index, word = assembled.word, "assembled {}", assembled.opcode);
        instructions.push(assembled);
    }

    let program = Program::new(instructions.iter().map(|i| i.word).collect());
    Ok(Assembly { instructions, program })
}

/// Parse and assemble a YAML source document
pub fn assemble_source(source: &str) -> Result<Assembly> {
    let parsed = parse_source(source)?;
    assemble(&parsed)
}

/// Assemble a source file and write the binary program.
///
/// The output file is only replaced once every instruction has been encoded
/// and the whole program has been written next to it.
pub fn assemble_file(
    src: impl AsRef<Path>,
    out: impl AsRef<Path>,
) -> Result<(Assembly, AssemblyReport)> {
    let out = out.as_ref();
    let text = fs::read_to_string(src.as_ref())?;
    let assembly = assemble_source(&text)?;

    write_atomic(out, &assembly.program.to_bytes())?;
    let report = AssemblyReport {
        instruction_count: assembly.instructions.len(),
        byte_size: fs::metadata(out)?.len(),
    };

    debug!(
        path = %out.display(),
        instructions = report.instruction_count,
        bytes = report.byte_size,
        "wrote program"
    );
    Ok((assembly, report))
}

/// Write through a temporary file in the target directory, then rename it over `path`
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Render bytes as `0x08, 0x01, ...`
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvm_spec::Opcode;
    use crate::error::AssemblerError;

    #[test]
    fn test_assemble_simple() {
        let source = r#"
- op: CONST
  value: 7
- op: CONST
  value: 3
- op: STORE
"#;

        let assembly = assemble_source(source).unwrap();
        assert_eq!(assembly.program.code.len(), 3);
        assert_eq!(assembly.program.code, vec![8 | (7 << 5), 8 | (3 << 5), 28]);
        assert_eq!(assembly.instructions[2].opcode, Opcode::Store);
    }

    #[test]
    fn test_assemble_empty() {
        let assembly = assemble(&[]).unwrap();
        assert!(assembly.program.is_empty());
        assert_eq!(assembly.ir_listing(), "");
    }

    #[test]
    fn test_ir_listing() {
        let source = vec![
            SymbolicInstruction::new("CONST").with_value(7),
            SymbolicInstruction::new("STORE"),
        ];
        let assembly = assemble(&source).unwrap();
        assert_eq!(
            assembly.ir_listing(),
            "00: op=CONST, A=8, B=7\n01: op=STORE, A=28\n"
        );
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("out.bin");
        fs::write(&path, b"old contents").unwrap();

        write_atomic(&path, &[1, 2, 3, 4]).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("no_such_dir").join("out.bin");

        assert!(matches!(write_atomic(&path, &[0; 4]), Err(AssemblerError::IoError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[0xE8, 0x00, 0x1C]), "0xE8, 0x00, 0x1C");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn test_report_display() {
        let report = AssemblyReport {
            instruction_count: 3,
            byte_size: 12,
        };
        assert_eq!(report.to_string(), "Assembled instructions: 3\nBinary size: 12 bytes");
    }
}
