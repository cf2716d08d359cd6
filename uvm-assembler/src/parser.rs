//! Symbolic program parser
//!
//! Reads the YAML instruction list into [`SymbolicInstruction`] records.
//! Mnemonic and operand validation happen later, in the encoder.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use crate::error::Result;

/// Operand as written in the source
///
/// YAML integers of any width are kept whole so that the encoder can report
/// them as out of range. Strings are accepted when they hold a decimal integer
/// (`value: "5"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i128),
    Text(String),
}

impl Operand {
    /// Integer value, if the operand is or spells one
    pub fn to_integer(&self) -> Option<i128> {
        match self {
            Operand::Int(v) => Some(*v),
            Operand::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v.into())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(OperandVisitor)
    }
}

struct OperandVisitor;

impl<'de> Visitor<'de> for OperandVisitor {
    type Value = Operand;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Operand, E> {
        Ok(Operand::Int(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Operand, E> {
        Ok(Operand::Int(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Operand, E> {
        Ok(Operand::Int(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Operand, E> {
        Ok(i128::try_from(v).map_or_else(|_| Operand::Text(v.to_string()), Operand::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Operand, E> {
        // Whole floats (`5.0`, `1e9`) count as integers
        if v.fract() == 0.0 && v.abs() < i128::MAX as f64 {
            Ok(Operand::Int(v as i128))
        } else {
            Ok(Operand::Text(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Operand, E> {
        Ok(Operand::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Operand, E> {
        Ok(Operand::Text(v))
    }
}

/// One record of a symbolic program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicInstruction {
    /// Mnemonic, any case
    pub op: String,

    /// Operand of CONST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Operand>,

    /// Operand of LOAD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<Operand>,

    /// Operand of MAX
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Operand>,
}

impl SymbolicInstruction {
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_addr(mut self, addr: i64) -> Self {
        self.addr = Some(addr.into());
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Look up an operand by its symbolic name
    pub fn operand(&self, name: &str) -> Option<&Operand> {
        match name {
            "value" => self.value.as_ref(),
            "addr" => self.addr.as_ref(),
            "offset" => self.offset.as_ref(),
            _ => None,
        }
    }
}

/// Parse a YAML document holding a sequence of instruction records
pub fn parse_source(source: &str) -> Result<Vec<SymbolicInstruction>> {
    // An empty document is an empty program
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    let instructions: Option<Vec<SymbolicInstruction>> = serde_yaml::from_str(source)?;
    Ok(instructions.unwrap_or_default())
}
