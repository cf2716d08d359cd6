//! Instruction execution for UVM
//!
//! All values are 32-bit unsigned; STORE and MAX pop their address operand
//! first because it is pushed last.

use uvm_spec::{Address, Instruction, Word};
use crate::error::Result;
use crate::memory::Memory;
use crate::state::VMState;

/// Effective address of a MAX operand
#[inline]
fn effective_address(base: Word, offset: Word) -> Address {
    Address::from(base) + Address::from(offset)
}

/// Execute a single instruction fetched from `pc`.
///
/// The program counter has already been advanced past the instruction.
pub fn execute(
    instr: &Instruction,
    pc: Address,
    state: &mut VMState,
    memory: &mut Memory,
) -> Result<()> {
    match *instr {
        Instruction::Const { value } => {
            state.push(value);
        }

        Instruction::Load { addr } => {
            state.push(memory.read(Address::from(addr)));
        }

        Instruction::Store => {
            // stack: [..., value, addr]
            let (addr, value) = state.pop_pair(instr.opcode(), pc)?;
            memory.write(Address::from(addr), value);
        }

        Instruction::Max { offset } => {
            // stack: [..., x, base]
            let (base, x) = state.pop_pair(instr.opcode(), pc)?;
            let y = memory.read(effective_address(base, offset));
            state.push(x.max(y));
        }
    }

    Ok(())
}
