//! UVM Assembler
//!
//! Assemble a list of symbolic instructions into 32-bit instruction words.
//!
//! Source programs are YAML sequences of records. Each record names its
//! mnemonic under `op` and, when the opcode takes one, its operand under the
//! opcode's field name (`value`, `addr`, or `offset`).
//!
//! ## Example
//!
//! ```rust
//! use uvm_assembler::assemble_source;
//!
//! let source = r#"
//! - op: CONST
//!   value: 7
//! - op: CONST
//!   value: 3
//! - op: STORE
//! "#;
//!
//! let assembly = assemble_source(source).unwrap();
//! assert_eq!(assembly.program.size_in_bytes(), 12);
//! ```

pub mod error;
pub mod parser;
pub mod encoder;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, assemble_file, assemble_source, hex_dump, Assembly, AssemblyReport};
pub use parser::{parse_source, Operand, SymbolicInstruction};
pub use encoder::{encode, AssembledInstruction};
