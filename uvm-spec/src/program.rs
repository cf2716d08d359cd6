//! # Program Structure for UVM
//!
//! Binary program format:
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────
//! 0x00    4     word 0 (little-endian)
//! 0x04    4     word 1
//! ...     ...   ...
//! ```
//!
//! There is no header, magic number, or length prefix. The word count is the
//! file size divided by 4.

use std::fs;
use std::path::Path;
use crate::error::{Result, UvmError};
use crate::{Word, WORD_SIZE};

/// Complete program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words, in execution order
    pub code: Vec<Word>,
}

impl Program {
    /// Create a program from encoded words
    pub fn new(code: Vec<Word>) -> Self {
        Self { code }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Size of the serialized program in bytes
    pub fn size_in_bytes(&self) -> usize {
        self.code.len() * WORD_SIZE
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_in_bytes());
        for &word in &self.code {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(UvmError::MalformedProgram { len: bytes.len() });
        }

        let code = bytes
            .chunks_exact(WORD_SIZE)
            .map(|chunk| Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { code })
    }

    /// Read a binary program file
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Write a binary program file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }
}

impl From<Vec<Word>> for Program {
    fn from(code: Vec<Word>) -> Self {
        Self::new(code)
    }
}
