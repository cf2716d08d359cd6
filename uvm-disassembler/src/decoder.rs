//! Instruction decoder

use uvm_spec::{encoding, Instruction, Word};
use crate::error::{DisassemblerError, Result};

/// Decode a 32-bit instruction word
pub fn decode(word: Word) -> Result<Instruction> {
    let (opcode, operand) = encoding::decode(word)?;
    Instruction::from_parts(opcode, operand).map_err(|_| DisassemblerError::InvalidEncoding(word))
}
