//! Symbolic instruction encoding
//!
//! Resolves the mnemonic, checks the operand against the opcode's field B
//! width, and packs the word through the shared codec.

use uvm_spec::{encoding, Opcode, Word};
use crate::error::{AssemblerError, Result};
use crate::parser::{Operand, SymbolicInstruction};

/// Intermediate form of one assembled instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembledInstruction {
    pub opcode: Opcode,
    /// Field A
    pub tag: u8,
    /// Field B
    pub operand: Option<Word>,
    /// Packed word
    pub word: Word,
}

/// Encode the instruction at position `index` of a program
pub fn encode(index: usize, instr: &SymbolicInstruction) -> Result<AssembledInstruction> {
    let opcode = Opcode::from_mnemonic(&instr.op).ok_or_else(|| AssemblerError::UnknownMnemonic {
        index,
        mnemonic: instr.op.clone(),
    })?;

    // Operands supplied to STORE are ignored
    let operand = match opcode.operand_name() {
        None => None,
        Some(name) => {
            let raw = instr.operand(name).ok_or(AssemblerError::MissingOperand {
                index,
                mnemonic: opcode.mnemonic(),
                operand: name,
            })?;
            Some(check_range(index, opcode, name, raw)?)
        }
    };

    let word = encoding::encode_opcode(opcode, operand.map(u64::from))
        .map_err(|source| AssemblerError::Encoding { index, source })?;

    Ok(AssembledInstruction {
        opcode,
        tag: opcode.tag(),
        operand,
        word,
    })
}

fn check_range(index: usize, opcode: Opcode, name: &'static str, raw: &Operand) -> Result<Word> {
    let raw = raw.to_integer().ok_or_else(|| AssemblerError::InvalidOperand {
        index,
        mnemonic: opcode.mnemonic(),
        operand: name,
        text: raw.to_string(),
    })?;

    let max = opcode.operand_max();
    match Word::try_from(raw) {
        Ok(value) if value <= max => Ok(value),
        _ => Err(AssemblerError::OperandOutOfRange {
            index,
            mnemonic: opcode.mnemonic(),
            operand: name,
            value: raw,
            max,
        }),
    }
}
