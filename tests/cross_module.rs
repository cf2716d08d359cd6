//! Cross-crate consistency tests
//!
//! The assembler, disassembler, and runtime all read the same opcode table.
//! These tests check that the three agree on every opcode.

use uvm_assembler::{assemble, SymbolicInstruction};
use uvm_disassembler::decode;
use uvm_runtime::{VM, VMConfig};
use uvm_spec::{Instruction, Opcode, OPCODE_TABLE};

fn symbolic(opcode: Opcode, operand: i64) -> SymbolicInstruction {
    let inst = SymbolicInstruction::new(opcode.mnemonic().to_lowercase());
    match opcode.operand_name() {
        Some("value") => inst.with_value(operand),
        Some("addr") => inst.with_addr(operand),
        Some("offset") => inst.with_offset(operand),
        _ => inst,
    }
}

#[test]
fn test_assembler_and_disassembler_agree() {
    for desc in OPCODE_TABLE {
        let max = i64::from(desc.opcode.operand_max());
        for operand in [0, 1, max / 2, max] {
            let assembly = assemble(&[symbolic(desc.opcode, operand)]).unwrap();
            let word = assembly.program.code[0];
            let decoded = decode(word).unwrap();

            assert_eq!(decoded.opcode(), desc.opcode);
            assert_eq!(
                decoded.operand(),
                desc.operand.map(|_| operand as u32),
                "{} {}",
                desc.name,
                operand
            );
        }
    }
}

#[test]
fn test_assembler_rejects_what_codec_rejects() {
    for desc in OPCODE_TABLE.iter().filter(|d| d.operand_bits > 0) {
        let over = 1i64 << desc.operand_bits;
        assert!(assemble(&[symbolic(desc.opcode, over)]).is_err(), "{}", desc.name);
    }
}

#[test]
fn test_runtime_executes_assembled_words() {
    let source = vec![
        SymbolicInstruction::new("CONST").with_value(0x1F_FFFF),
        SymbolicInstruction::new("CONST").with_value(300),
        SymbolicInstruction::new("STORE"),
        SymbolicInstruction::new("LOAD").with_addr(300),
    ];
    let assembly = assemble(&source).unwrap();

    let decoded: Vec<Instruction> =
        assembly.program.code.iter().map(|&w| decode(w).unwrap()).collect();
    assert_eq!(decoded[3], Instruction::Load { addr: 300 });

    let mut vm = VM::with_program(&assembly.program, VMConfig::default());
    vm.run().unwrap();
    assert_eq!(vm.stack(), &[0x1F_FFFF]);
}
