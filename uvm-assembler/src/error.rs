//! Assembler errors

use thiserror::Error;
use uvm_spec::UvmError;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Instruction {index}: unknown mnemonic '{mnemonic}'")]
    UnknownMnemonic { index: usize, mnemonic: String },

    #[error("Instruction {index}: {mnemonic} requires operand '{operand}'")]
    MissingOperand {
        index: usize,
        mnemonic: &'static str,
        operand: &'static str,
    },

    #[error("Instruction {index}: {mnemonic} operand {operand}={value} out of range 0..={max}")]
    OperandOutOfRange {
        index: usize,
        mnemonic: &'static str,
        operand: &'static str,
        value: i128,
        max: u32,
    },

    #[error("Instruction {index}: {mnemonic} operand {operand}={text} is not an integer")]
    InvalidOperand {
        index: usize,
        mnemonic: &'static str,
        operand: &'static str,
        text: String,
    },

    #[error("Instruction {index}: {source}")]
    Encoding {
        index: usize,
        #[source]
        source: UvmError,
    },

    #[error("Invalid program source: {0}")]
    InvalidSource(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AssemblerError {
    /// Index of the offending instruction, when the error is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            AssemblerError::UnknownMnemonic { index, .. }
            | AssemblerError::MissingOperand { index, .. }
            | AssemblerError::OperandOutOfRange { index, .. }
            | AssemblerError::InvalidOperand { index, .. }
            | AssemblerError::Encoding { index, .. } => Some(*index),
            AssemblerError::InvalidSource(_) | AssemblerError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
