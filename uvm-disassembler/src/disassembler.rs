//! Main disassembler logic

use std::fmt::Write as _;
use uvm_spec::Program;
use crate::error::Result;
use crate::decoder::decode;
use crate::formatter::{format, format_source};

/// Disassemble a program into an annotated listing
pub fn disassemble(program: &Program) -> Result<String> {
    let mut output = String::new();

    output.push_str("; UVM Disassembly\n");
    let _ = writeln!(
        output,
        "; Code size: {} bytes ({} instructions)",
        program.size_in_bytes(),
        program.len()
    );
    output.push('\n');

    for (addr, &word) in program.code.iter().enumerate() {
        // Word address, then hex encoding
        let _ = write!(output, "{:04}:  {:08X}  ", addr, word);

        match decode(word) {
            Ok(instr) => output.push_str(&format(&instr)),
            Err(e) => {
                let _ = write!(output, "; ERROR: {}", e);
            }
        }

        output.push('\n');
    }

    Ok(output)
}

/// Disassemble a program back into YAML source accepted by the assembler.
///
/// Fails on the first undecodable word.
pub fn to_source(program: &Program) -> Result<String> {
    let mut output = String::new();
    for &word in &program.code {
        output.push_str(&format_source(&decode(word)?));
        output.push('\n');
    }
    Ok(output)
}
