//! # Instruction Word Codec
//!
//! Packs and unpacks 32-bit instruction words.
//!
//! ## Word Format (32-bit)
//!
//! ```text
//! [A:5][B:operand_bits][zero padding]
//!  bit 0 ............................ bit 31
//! ```
//!
//! Field A holds the opcode tag. Field B starts at bit 5 and is as wide as the
//! opcode's descriptor says; instructions without an operand encode to just
//! their tag.

use crate::error::{Result, UvmError};
use crate::{Opcode, Word, MAX_OPERAND_BITS, TAG_BITS, TAG_MASK};

/// Field A: bits 0-4
pub const TAG_SHIFT: u32 = 0;

/// Field B: starts right above the tag
pub const OPERAND_SHIFT: u32 = TAG_BITS;

/// Mask for a field of the given width
#[inline]
pub const fn field_mask(bits: u32) -> Word {
    if bits >= Word::BITS {
        Word::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Extract field A from a word
#[inline]
pub const fn extract_tag(word: Word) -> u8 {
    ((word >> TAG_SHIFT) & TAG_MASK) as u8
}

/// Extract field B of the given width from a word
#[inline]
pub const fn extract_operand(word: Word, operand_bits: u32) -> Word {
    (word >> OPERAND_SHIFT) & field_mask(operand_bits)
}

/// Pack a tag and an optional operand into a word.
///
/// With `operand_bits == 0` the operand must be absent; otherwise it must be
/// present and lie in `0..2^operand_bits`.
pub fn encode(tag: u8, operand: Option<u64>, operand_bits: u32) -> Result<Word> {
    if Word::from(tag) > TAG_MASK {
        return Err(UvmError::InvalidTag(tag));
    }
    if operand_bits > MAX_OPERAND_BITS {
        return Err(UvmError::InvalidFieldWidth(operand_bits));
    }

    let mut word = Word::from(tag) << TAG_SHIFT;

    if operand_bits == 0 {
        if operand.is_some() {
            return Err(UvmError::UnexpectedOperand { tag });
        }
        return Ok(word);
    }

    let value = operand.ok_or(UvmError::MissingOperand { tag })?;
    let max = field_mask(operand_bits);
    if value > u64::from(max) {
        return Err(UvmError::OperandOutOfRange {
            value: i64::try_from(value).unwrap_or(i64::MAX),
            bits: operand_bits,
            max,
        });
    }

    // value fits in 27 bits, so the shift stays inside the word
    word |= (value as Word) << OPERAND_SHIFT;
    Ok(word)
}

/// Pack an opcode and its operand using the opcode table layout
pub fn encode_opcode(opcode: Opcode, operand: Option<u64>) -> Result<Word> {
    encode(opcode.tag(), operand, opcode.operand_bits())
}

/// Unpack a word into its opcode and operand.
///
/// Bits above the operand field are ignored.
pub fn decode(word: Word) -> Result<(Opcode, Option<Word>)> {
    let tag = extract_tag(word);
    let opcode = Opcode::from_tag(tag).ok_or(UvmError::UnknownOpcode { tag, word })?;

    let operand = match opcode.operand_bits() {
        0 => None,
        bits => Some(extract_operand(word, bits)),
    };

    Ok((opcode, operand))
}
