//! # Error Types for UVM words and programs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UvmError {
    // Field layout errors
    #[error("Invalid opcode tag: {0} (valid range: 0-31)")]
    InvalidTag(u8),

    #[error("Invalid operand field width: {0} bits (maximum 27)")]
    InvalidFieldWidth(u32),

    // Encoding errors
    #[error("Missing operand for opcode tag {tag}")]
    MissingOperand { tag: u8 },

    #[error("Unexpected operand for opcode tag {tag}: instruction has no operand field")]
    UnexpectedOperand { tag: u8 },

    #[error("Operand {value} out of range: field B is {bits} bits wide (0..={max})")]
    OperandOutOfRange { value: i64, bits: u32, max: u32 },

    // Decoding errors
    #[error("Unknown opcode A={tag} in word {word:#010x}")]
    UnknownOpcode { tag: u8, word: u32 },

    // Program format errors
    #[error("Malformed program: {len} bytes is not a multiple of 4")]
    MalformedProgram { len: usize },

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UvmError>;
