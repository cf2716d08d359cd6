//! # UVM Specification
//!
//! Instruction set and word format for the UVM stack-and-memory machine.
//!
//! ## Key Features
//! - 32-bit instruction words: 5-bit opcode tag (field A) in the low bits,
//!   a variable-width operand (field B) directly above it
//! - Four instructions: CONST, LOAD, STORE, MAX
//! - Flat binary programs: little-endian words, no header
//! - Sparse word-addressed memory shared by code and data

pub mod opcode;
pub mod encoding;
pub mod instruction;
pub mod error;
pub mod program;

pub use opcode::{Opcode, OpcodeDescriptor, OPCODE_TABLE};
pub use instruction::Instruction;
pub use error::{UvmError, Result};
pub use program::Program;

/// Machine word (instruction and data cell)
pub type Word = u32;

/// Memory cell index, in word units
pub type Address = u64;

/// Size of one word in the binary program format
pub const WORD_SIZE: usize = 4;

/// Width of the opcode tag (field A)
pub const TAG_BITS: u32 = 5;

/// Mask selecting the opcode tag
pub const TAG_MASK: Word = 0x1F;

/// Widest operand field that still fits a word next to the tag
pub const MAX_OPERAND_BITS: u32 = Word::BITS - TAG_BITS;

/// Default step limit for the execution engine
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;
