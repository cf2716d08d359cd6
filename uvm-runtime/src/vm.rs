//! Virtual Machine for UVM

use std::path::Path;

use tracing::{debug, warn};
use uvm_disassembler::DisassemblerError;
use uvm_spec::{Address, Instruction, Program, Word, DEFAULT_MAX_STEPS};
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::VMState;

/// VM configuration
#[derive(Debug, Clone)]
pub struct VMConfig {
    /// Maximum number of steps per run before faulting
    pub max_steps: u64,

    /// Log every executed instruction at debug level
    pub trace: bool,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            trace: false,
        }
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of steps executed by this run
    pub steps: u64,

    /// Program counter at halt
    pub pc: Address,

    /// Stack contents at halt
    pub stack: Vec<Word>,
}

/// UVM Virtual Machine
#[derive(Debug, Clone, Default)]
pub struct VM {
    /// Stack and program counter
    state: VMState,

    /// Memory subsystem (program and data)
    memory: Memory,

    /// Configuration
    config: VMConfig,
}

impl VM {
    /// Create an empty VM
    pub fn new(config: VMConfig) -> Self {
        Self {
            state: VMState::new(),
            memory: Memory::new(),
            config,
        }
    }

    /// Create a VM with a program already loaded
    pub fn with_program(program: &Program, config: VMConfig) -> Self {
        let mut vm = Self::new(config);
        vm.load(program);
        vm
    }

    /// Load program words into memory[0..n) and reset the program counter.
    ///
    /// Memory above the program keeps its contents and serves as data memory.
    pub fn load(&mut self, program: &Program) {
        self.memory.load_code(&program.code);
        self.state.reset(program.len() as Address);
        debug!(words = program.len(), "loaded program");
    }

    /// Load a little-endian binary program
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let program = Program::from_bytes(bytes)?;
        self.load(&program);
        Ok(())
    }

    /// Load a binary program file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let program = Program::read_from(path)?;
        self.load(&program);
        Ok(())
    }

    /// Execute one instruction.
    ///
    /// Returns `false` without doing anything once the program counter has run
    /// past the program.
    pub fn step(&mut self) -> Result<bool> {
        if self.state.is_halted() {
            return Ok(false);
        }

        let pc = self.state.pc;
        let word = self.memory.read(pc);
        self.state.pc += 1;

        let inst = decode_at(pc, word)?;

        if self.config.trace {
            debug!(
                step = self.state.steps,
                pc,
                depth = self.state.stack.len(),
                "{:08X}  {}",
                word,
                uvm_disassembler::format(&inst)
            );
        }

        execute(&inst, pc, &mut self.state, &mut self.memory)?;
        self.state.steps += 1;
        Ok(true)
    }

    /// Run until halt, using the configured step limit
    pub fn run(&mut self) -> Result<ExecutionResult> {
        self.run_with_limit(self.config.max_steps)
    }

    /// Run until the program counter passes the program.
    ///
    /// Fails with `StepLimitExceeded` once `max_steps` steps have executed
    /// without halting. State is left as-is on any fault.
    pub fn run_with_limit(&mut self, max_steps: u64) -> Result<ExecutionResult> {
        let mut steps = 0u64;

        while !self.state.is_halted() {
            if steps >= max_steps {
                warn!(limit = max_steps, pc = self.state.pc, "step limit exceeded");
                return Err(RuntimeError::StepLimitExceeded { limit: max_steps });
            }
            self.step()?;
            steps += 1;
        }

        debug!(steps, pc = self.state.pc, depth = self.state.stack.len(), "program halted");

        Ok(ExecutionResult {
            steps,
            pc: self.state.pc,
            stack: self.state.stack.clone(),
        })
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging and snapshots)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable memory, for seeding data before a run
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Operand stack, top last
    pub fn stack(&self) -> &[Word] {
        &self.state.stack
    }

    pub fn config(&self) -> &VMConfig {
        &self.config
    }
}

/// Decode the word fetched from `pc`
fn decode_at(pc: Address, word: Word) -> Result<Instruction> {
    uvm_disassembler::decode(word).map_err(|e| match e {
        DisassemblerError::UnknownOpcode { tag, word } => {
            RuntimeError::UnknownOpcode { pc, tag, word }
        }
        _ => RuntimeError::InvalidEncoding { pc, word },
    })
}
