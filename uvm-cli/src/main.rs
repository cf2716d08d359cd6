//! UVM command-line tools.
//!
//! # Usage
//! ```text
//! uvm asm <source.yaml> <out.bin> [--test]
//! uvm run <program.bin> <dump.xml> [--start N] [--end N] [--max-steps N] [--trace]
//! uvm disasm <program.bin> [--source]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uvm_assembler::{assemble_file, hex_dump};
use uvm_runtime::snapshot::DEFAULT_RANGE;
use uvm_runtime::{MemorySnapshot, VMConfig, VM};
use uvm_spec::{Program, DEFAULT_MAX_STEPS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assembler and interpreter for the UVM stack machine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a YAML instruction list into a binary program
    Asm {
        /// YAML file with the instruction list
        source: PathBuf,
        /// Output binary file (.bin)
        out: PathBuf,
        /// Also print the intermediate representation and the output bytes
        #[arg(long)]
        test: bool,
    },

    /// Run a binary program and dump a memory window as XML
    Run {
        /// Binary program file (.bin)
        program: PathBuf,
        /// Output XML file
        dump: PathBuf,
        /// First dumped address (inclusive)
        #[arg(long, default_value_t = DEFAULT_RANGE.0, allow_negative_numbers = true)]
        start: i64,
        /// Last dumped address (exclusive)
        #[arg(long, default_value_t = DEFAULT_RANGE.1, allow_negative_numbers = true)]
        end: i64,
        /// Abort after this many steps
        #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: u64,
        /// Log every executed instruction
        #[arg(long)]
        trace: bool,
    },

    /// Print a listing of a binary program
    Disasm {
        /// Binary program file (.bin)
        program: PathBuf,
        /// Emit YAML source instead of a listing
        #[arg(long)]
        source: bool,
    },
}

fn init_tracing(trace: bool) {
    let default = if trace { "info,uvm_runtime=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Asm { source, out, test } => {
            init_tracing(false);
            assemble(source, out, test)
        }
        Command::Run {
            program,
            dump,
            start,
            end,
            max_steps,
            trace,
        } => {
            init_tracing(trace);
            run(program, dump, start, end, VMConfig { max_steps, trace })
        }
        Command::Disasm { program, source } => {
            init_tracing(false);
            disasm(program, source)
        }
    }
}

fn assemble(source: PathBuf, out: PathBuf, test: bool) -> Result<()> {
    let (assembly, report) = assemble_file(&source, &out)
        .with_context(|| format!("failed to assemble {}", source.display()))?;

    println!("{}", report);

    if test {
        println!("\nIntermediate representation:");
        print!("{}", assembly.ir_listing());
        println!("\nBytes (hex):");
        println!("{}", hex_dump(&assembly.program.to_bytes()));
    }

    info!(out = %out.display(), "assembly complete");
    Ok(())
}

fn run(program: PathBuf, dump: PathBuf, start: i64, end: i64, config: VMConfig) -> Result<()> {
    let mut vm = VM::new(config);
    vm.load_file(&program)
        .with_context(|| format!("failed to load {}", program.display()))?;

    let result = vm.run().with_context(|| {
        format!("execution of {} failed at PC {}", program.display(), vm.state().pc)
    })?;
    info!(steps = result.steps, depth = result.stack.len(), "program finished");

    MemorySnapshot::capture(vm.memory(), start, end)
        .and_then(|snapshot| snapshot.write_xml(&dump))
        .with_context(|| format!("failed to write memory dump {}", dump.display()))?;

    println!("Program finished. Memory dump written to: {}", dump.display());
    Ok(())
}

fn disasm(program: PathBuf, source: bool) -> Result<()> {
    let prog = Program::read_from(&program)
        .with_context(|| format!("failed to read {}", program.display()))?;

    let text = if source {
        uvm_disassembler::to_source(&prog)?
    } else {
        uvm_disassembler::disassemble(&prog)?
    };
    print!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["uvm", "run", "prog.bin", "dump.xml"]);
        match cli.command {
            Command::Run { start, end, max_steps, trace, .. } => {
                assert_eq!((start, end), DEFAULT_RANGE);
                assert_eq!(end, 64);
                assert_eq!(max_steps, 1_000_000);
                assert!(!trace);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_asm_test_flag() {
        let cli = Cli::parse_from(["uvm", "asm", "prog.yaml", "prog.bin", "--test"]);
        assert!(matches!(cli.command, Command::Asm { test: true, .. }));
    }
}
