//! # UVM Disassembler
//!
//! Turn UVM instruction words back into readable text.
//!
//! Decoding goes through the same opcode table the assembler encodes with,
//! so the two directions cannot drift apart.
//!
//! ## Example
//!
//! ```rust
//! use uvm_spec::Program;
//! use uvm_disassembler::disassemble;
//!
//! let program = Program::new(vec![0xE8, 0x1C]); // CONST 7, STORE
//! let asm = disassemble(&program).unwrap();
//! assert!(asm.contains("CONST 7"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, to_source};
pub use decoder::decode;
pub use formatter::{format, format_source};
