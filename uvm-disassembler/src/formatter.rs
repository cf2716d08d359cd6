//! Instruction formatting to assembly text

use uvm_spec::Instruction;

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Const { value } => format!("CONST {}", value),
        Instruction::Load { addr } => format!("LOAD {}", addr),
        Instruction::Store => "STORE".to_string(),
        Instruction::Max { offset } => format!("MAX +{}", offset),
    }
}

/// Format instruction as one YAML source record
pub fn format_source(instr: &Instruction) -> String {
    let opcode = instr.opcode();
    match (opcode.operand_name(), instr.operand()) {
        (Some(name), Some(value)) => format!("- {{op: {}, {}: {}}}", opcode, name, value),
        _ => format!("- {{op: {}}}", opcode),
    }
}
