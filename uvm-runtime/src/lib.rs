//! # UVM Runtime
//!
//! Execute UVM programs on a stack-and-memory virtual machine.
//!
//! ## Features
//!
//! - **Sparse memory**: word-addressed, unwritten cells read as zero; the
//!   program occupies cells `0..n` and everything above is data
//! - **Operand stack**: 32-bit unsigned values
//! - **4 instructions**: CONST, LOAD, STORE, MAX
//! - **Step limit**: runaway protection, configurable via [`VMConfig`]
//! - **Snapshots**: dump a memory window as XML
//!
//! ## Example
//!
//! ```rust
//! use uvm_runtime::{VM, VMConfig};
//! use uvm_spec::{Instruction, Program};
//!
//! let program = Program::new(vec![
//!     Instruction::Const { value: 7 }.encode().unwrap(),
//!     Instruction::Const { value: 3 }.encode().unwrap(),
//!     Instruction::Store.encode().unwrap(),
//! ]);
//!
//! let mut vm = VM::with_program(&program, VMConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.steps, 3);
//! assert_eq!(vm.memory().read(3), 7);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod execute;
pub mod vm;
pub mod snapshot;

pub use state::VMState;
pub use memory::Memory;
pub use vm::{VM, VMConfig, ExecutionResult};
pub use error::RuntimeError;
pub use snapshot::MemorySnapshot;

/// Simple execution helper
///
/// Runs a program with the default configuration and returns the final memory.
pub fn run_program(program: &uvm_spec::Program) -> Result<Memory, RuntimeError> {
    let mut vm = VM::with_program(program, VMConfig::default());
    vm.run()?;
    Ok(vm.memory().clone())
}
