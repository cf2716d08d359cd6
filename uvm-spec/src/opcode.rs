//! # UVM Opcode Definitions
//!
//! This module defines the opcode table shared by the assembler (encode
//! direction) and the execution engine (decode direction).
//!
//! ## Opcode Table
//!
//! ```text
//! Mnemonic  A (tag)  B (bits)  operand  effect
//! ──────────────────────────────────────────────────────────────────
//! CONST      8       21        value    push value
//! LOAD      21       24        addr     push mem[addr]
//! STORE     28        0        -        pop addr, pop value, mem[addr] = value
//! MAX       25       13        offset   pop base, pop x, push max(x, mem[base + offset])
//! ```

use serde::{Deserialize, Serialize};
use crate::{Word, MAX_OPERAND_BITS};

/// Instruction opcode (5-bit tag)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// CONST: push literal value
    Const = 8,
    /// LOAD: push mem[addr]
    Load = 21,
    /// STORE: pop addr, pop value, mem[addr] = value
    Store = 28,
    /// MAX: pop base, pop x, push max(x, mem[base + offset])
    Max = 25,
}

/// Static description of one opcode's field layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    pub opcode: Opcode,
    /// Unique mnemonic
    pub name: &'static str,
    /// Value placed in field A
    pub tag: u8,
    /// Width of field B (0 when the instruction takes no operand)
    pub operand_bits: u32,
    /// Name of the operand in symbolic source
    pub operand: Option<&'static str>,
}

/// Every opcode, in tag order
pub const OPCODE_TABLE: &[OpcodeDescriptor] = &[
    Opcode::Const.descriptor(),
    Opcode::Load.descriptor(),
    Opcode::Max.descriptor(),
    Opcode::Store.descriptor(),
];

impl Opcode {
    /// All opcodes
    pub const ALL: [Opcode; 4] = [Opcode::Const, Opcode::Load, Opcode::Store, Opcode::Max];

    /// Field layout for this opcode
    pub const fn descriptor(self) -> OpcodeDescriptor {
        match self {
            Opcode::Const => OpcodeDescriptor {
                opcode: self,
                name: "CONST",
                tag: 8,
                operand_bits: 21,
                operand: Some("value"),
            },
            Opcode::Load => OpcodeDescriptor {
                opcode: self,
                name: "LOAD",
                tag: 21,
                operand_bits: 24,
                operand: Some("addr"),
            },
            Opcode::Store => OpcodeDescriptor {
                opcode: self,
                name: "STORE",
                tag: 28,
                operand_bits: 0,
                operand: None,
            },
            Opcode::Max => OpcodeDescriptor {
                opcode: self,
                name: "MAX",
                tag: 25,
                operand_bits: 13,
                operand: Some("offset"),
            },
        }
    }

    /// Value of field A
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up an opcode by its field A value
    pub fn from_tag(tag: u8) -> Option<Self> {
        OPCODE_TABLE
            .iter()
            .find(|desc| desc.tag == tag)
            .map(|desc| desc.opcode)
    }

    /// Upper-case mnemonic
    pub const fn mnemonic(self) -> &'static str {
        self.descriptor().name
    }

    /// Look up an opcode by mnemonic, ignoring ASCII case
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        let name = name.trim();
        OPCODE_TABLE
            .iter()
            .find(|desc| desc.name.eq_ignore_ascii_case(name))
            .map(|desc| desc.opcode)
    }

    /// Width of field B
    #[inline]
    pub const fn operand_bits(self) -> u32 {
        self.descriptor().operand_bits
    }

    /// Symbolic operand name (`value`, `addr`, `offset`)
    pub const fn operand_name(self) -> Option<&'static str> {
        self.descriptor().operand
    }

    /// Whether field B is present
    #[inline]
    pub const fn has_operand(self) -> bool {
        self.operand_bits() != 0
    }

    /// Largest value field B can hold (0 for instructions without an operand)
    pub const fn operand_max(self) -> Word {
        let bits = self.operand_bits();
        if bits == 0 {
            0
        } else {
            ((1u64 << bits) - 1) as Word
        }
    }

    /// Check the table invariants: unique tags, 5-bit tags, fields that fit a word
    pub fn validate_table() -> bool {
        OPCODE_TABLE.iter().enumerate().all(|(i, desc)| {
            desc.tag <= 0x1F
                && desc.tag == desc.opcode.tag()
                && desc.operand_bits <= MAX_OPERAND_BITS
                && desc.operand.is_some() == (desc.operand_bits != 0)
                && OPCODE_TABLE[i + 1..].iter().all(|other| other.tag != desc.tag)
        })
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
