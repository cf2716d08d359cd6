//! Tests for malformed input handling in the assembler
//!
//! Tests error handling for various invalid inputs.

use uvm_assembler::{assemble_file, assemble_source, AssemblerError};

// ============================================================================
// Invalid Instruction Tests
// ============================================================================

#[test]
fn test_unknown_instruction() {
    let source = "- {op: CONST, value: 1}\n- {op: JMP, addr: 0}\n";
    let result = assemble_source(source);

    if let Err(AssemblerError::UnknownMnemonic { index, mnemonic }) = result {
        assert_eq!(index, 1);
        assert_eq!(mnemonic, "JMP");
    } else {
        panic!("Expected UnknownMnemonic error");
    }
}

#[test]
fn test_instruction_typo() {
    let source = "- {op: STOR}"; // typo: STOR instead of STORE
    let result = assemble_source(source);
    assert!(matches!(result, Err(AssemblerError::UnknownMnemonic { .. })));
}

// ============================================================================
// Missing Operand Tests
// ============================================================================

#[test]
fn test_const_missing_value() {
    let result = assemble_source("- {op: CONST}");
    assert!(matches!(
        result,
        Err(AssemblerError::MissingOperand { index: 0, mnemonic: "CONST", operand: "value" })
    ));
}

#[test]
fn test_max_with_wrong_field_name() {
    let result = assemble_source("- {op: MAX, value: 3}");
    assert!(matches!(
        result,
        Err(AssemblerError::MissingOperand { mnemonic: "MAX", operand: "offset", .. })
    ));
}

// ============================================================================
// Operand Range Tests
// ============================================================================

#[test]
fn test_const_value_boundary() {
    assert!(assemble_source("- {op: CONST, value: 2097151}").is_ok());
    assert!(matches!(
        assemble_source("- {op: CONST, value: 2097152}"),
        Err(AssemblerError::OperandOutOfRange { value: 2097152, max: 2097151, .. })
    ));
}

#[test]
fn test_load_addr_boundary() {
    assert!(assemble_source("- {op: LOAD, addr: 16777215}").is_ok());
    assert!(matches!(
        assemble_source("- {op: LOAD, addr: 16777216}"),
        Err(AssemblerError::OperandOutOfRange { .. })
    ));
}

#[test]
fn test_negative_offset() {
    let err = assemble_source("- {op: MAX, offset: -4}").unwrap_err();
    assert_eq!(err.to_string(), "Instruction 0: MAX operand offset=-4 out of range 0..=8191");
}

#[test]
fn test_value_wider_than_64_bits() {
    let source = "- {op: CONST, value: 1}\n- {op: CONST, value: 18446744073709551616}\n";
    let result = assemble_source(source);

    if let Err(AssemblerError::OperandOutOfRange { index, operand, value, max, .. }) = result {
        assert_eq!(index, 1);
        assert_eq!(operand, "value");
        assert_eq!(value, 18446744073709551616);
        assert_eq!(max, 2097151);
    } else {
        panic!("Expected OperandOutOfRange error, got {:?}", result);
    }
}

#[test]
fn test_addr_past_i64() {
    let result = assemble_source("- {op: LOAD, addr: 9223372036854775808}");
    assert!(matches!(
        result,
        Err(AssemblerError::OperandOutOfRange { index: 0, operand: "addr", .. })
    ));
}

// ============================================================================
// Source Format Tests
// ============================================================================

#[test]
fn test_source_must_be_a_list() {
    let result = assemble_source("op: CONST\nvalue: 1\n");
    assert!(matches!(result, Err(AssemblerError::InvalidSource(_))));
}

#[test]
fn test_quoted_integer_operand() {
    let source = "- {op: CONST, value: \"5\"}\n- {op: MAX, offset: '2'}\n";
    let assembly = assemble_source(source).unwrap();
    assert_eq!(assembly.program.code, vec![8 | (5 << 5), 25 | (2 << 5)]);
}

#[test]
fn test_quoted_operand_is_range_checked() {
    let result = assemble_source("- {op: MAX, offset: \"8192\"}");
    assert!(matches!(
        result,
        Err(AssemblerError::OperandOutOfRange { value: 8192, max: 8191, .. })
    ));
}

#[test]
fn test_operand_must_be_an_integer() {
    let result = assemble_source("- {op: STORE}\n- {op: CONST, value: seven}\n");
    assert!(matches!(
        result,
        Err(AssemblerError::InvalidOperand { index: 1, mnemonic: "CONST", operand: "value", .. })
    ));

    let result = assemble_source("- {op: CONST, value: 2.5}");
    assert!(matches!(result, Err(AssemblerError::InvalidOperand { .. })));
}

#[test]
fn test_missing_source_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let result = assemble_file(dir.path().join("nope.yaml"), dir.path().join("out.bin"));
    assert!(matches!(result, Err(AssemblerError::IoError(_))));
}
