//! Disassembler errors

use thiserror::Error;
use uvm_spec::UvmError;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Invalid instruction encoding: 0x{0:08X}")]
    InvalidEncoding(u32),

    #[error("Unknown opcode A={tag} in word 0x{word:08X}")]
    UnknownOpcode { tag: u8, word: u32 },

    #[error("Malformed program: {0}")]
    MalformedProgram(UvmError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<UvmError> for DisassemblerError {
    fn from(err: UvmError) -> Self {
        match err {
            UvmError::UnknownOpcode { tag, word } => DisassemblerError::UnknownOpcode { tag, word },
            UvmError::IoError(io) => DisassemblerError::IoError(io),
            other => DisassemblerError::MalformedProgram(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
