//! Runtime error types for UVM

use thiserror::Error;
use uvm_spec::{Address, Opcode, UvmError};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] UvmError),

    #[error("Unknown opcode A={tag} in word {word:#010x} at PC {pc}")]
    UnknownOpcode { pc: Address, tag: u8, word: u32 },

    #[error("Invalid instruction encoding {word:#010x} at PC {pc}")]
    InvalidEncoding { pc: Address, word: u32 },

    #[error("Stack underflow at PC {pc}: {opcode} needs 2 operands, stack has {depth}")]
    StackUnderflow { pc: Address, opcode: Opcode, depth: usize },

    #[error("Invalid memory address: {address}")]
    InvalidAddress { address: i64 },

    #[error("Step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
