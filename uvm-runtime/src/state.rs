//! VM state for UVM

use uvm_spec::{Address, Opcode, Word};
use crate::error::{Result, RuntimeError};

/// Stack, program counter, and program bounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VMState {
    /// Operand stack (top = last element)
    pub stack: Vec<Word>,

    /// Address of the next word to execute
    pub pc: Address,

    /// Number of cells occupied by the loaded program
    pub program_length: Address,

    /// Steps executed since load
    pub steps: u64,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the state at a freshly loaded program
    pub fn reset(&mut self, program_length: Address) {
        self.stack.clear();
        self.program_length = program_length;
        self.pc = 0;
        self.steps = 0;
    }

    /// Execution stops once the PC runs past the program
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.pc >= self.program_length
    }

    #[inline]
    pub fn push(&mut self, value: Word) {
        self.stack.push(value);
    }

    /// Pop two values for a binary instruction at `pc`.
    ///
    /// Returns `(top, below)`: the most recently pushed value comes first.
    /// The stack is left untouched on underflow.
    pub fn pop_pair(&mut self, opcode: Opcode, pc: Address) -> Result<(Word, Word)> {
        let depth = self.stack.len();
        if depth < 2 {
            return Err(RuntimeError::StackUnderflow { pc, opcode, depth });
        }
        let top = self.stack.pop().unwrap_or_default();
        let below = self.stack.pop().unwrap_or_default();
        Ok((top, below))
    }
}
