//! UVM Instruction Set
//!
//! Typed form of a decoded word. Every variant carries exactly the operand its
//! opcode's field B holds.

use serde::{Deserialize, Serialize};
use crate::encoding;
use crate::error::{Result, UvmError};
use crate::{Opcode, Word};

/// UVM Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// CONST: push value
    Const { value: Word },

    /// LOAD: push mem[addr]
    Load { addr: Word },

    /// STORE: pop addr, pop value, mem[addr] = value
    Store,

    /// MAX: pop base, pop x, push max(x, mem[base + offset])
    Max { offset: Word },
}

impl Instruction {
    /// Opcode of this instruction
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Const { .. } => Opcode::Const,
            Instruction::Load { .. } => Opcode::Load,
            Instruction::Store => Opcode::Store,
            Instruction::Max { .. } => Opcode::Max,
        }
    }

    /// Value of field B, if the instruction has one
    pub fn operand(&self) -> Option<Word> {
        match *self {
            Instruction::Const { value } => Some(value),
            Instruction::Load { addr } => Some(addr),
            Instruction::Store => None,
            Instruction::Max { offset } => Some(offset),
        }
    }

    /// Build an instruction from an opcode and its operand.
    ///
    /// The operand is range-checked against the opcode's field width.
    pub fn from_parts(opcode: Opcode, operand: Option<Word>) -> Result<Self> {
        let tag = opcode.tag();
        if let Some(value) = operand {
            if value > opcode.operand_max() && opcode.has_operand() {
                return Err(UvmError::OperandOutOfRange {
                    value: i64::from(value),
                    bits: opcode.operand_bits(),
                    max: opcode.operand_max(),
                });
            }
        }

        match (opcode, operand) {
            (Opcode::Const, Some(value)) => Ok(Instruction::Const { value }),
            (Opcode::Load, Some(addr)) => Ok(Instruction::Load { addr }),
            (Opcode::Max, Some(offset)) => Ok(Instruction::Max { offset }),
            (Opcode::Store, None) => Ok(Instruction::Store),
            (Opcode::Store, Some(_)) => Err(UvmError::UnexpectedOperand { tag }),
            (_, None) => Err(UvmError::MissingOperand { tag }),
        }
    }

    /// Encode to a 32-bit word
    pub fn encode(&self) -> Result<Word> {
        encoding::encode_opcode(self.opcode(), self.operand().map(u64::from))
    }

    /// Decode a 32-bit word
    pub fn decode(word: Word) -> Result<Self> {
        let (opcode, operand) = encoding::decode(word)?;
        Self::from_parts(opcode, operand)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operand() {
            Some(operand) => write!(f, "{} {}", self.opcode(), operand),
            None => write!(f, "{}", self.opcode()),
        }
    }
}
