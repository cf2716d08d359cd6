//! Memory subsystem
//!
//! Sparse word-addressed memory. Cells that were never written read as zero;
//! only non-zero cells take up storage.

use std::collections::HashMap;
use uvm_spec::{Address, Word};
use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    data: HashMap<Address, Word>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            data: HashMap::new(),
        }
    }

    /// Convert a signed address, rejecting negative values
    pub fn checked_address(address: i64) -> Result<Address> {
        Address::try_from(address).map_err(|_| RuntimeError::InvalidAddress { address })
    }

    /// Read a cell (absent cells are 0)
    #[inline]
    pub fn read(&self, addr: Address) -> Word {
        self.data.get(&addr).copied().unwrap_or(0)
    }

    /// Write a cell
    pub fn write(&mut self, addr: Address, value: Word) {
        if value == 0 {
            self.data.remove(&addr);
        } else {
            self.data.insert(addr, value);
        }
    }

    /// Read through a signed address
    pub fn read_signed(&self, address: i64) -> Result<Word> {
        Ok(self.read(Self::checked_address(address)?))
    }

    /// Write through a signed address
    pub fn write_signed(&mut self, address: i64, value: Word) -> Result<()> {
        self.write(Self::checked_address(address)?, value);
        Ok(())
    }

    /// Place program words at addresses 0..code.len()
    pub fn load_code(&mut self, code: &[Word]) {
        for (i, &word) in code.iter().enumerate() {
            self.write(i as Address, word);
        }
    }

    /// Number of non-zero cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
