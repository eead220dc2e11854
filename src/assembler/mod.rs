//! Two-pass assembler: text front-end plus encoder, producing an
//! instruction image ready for the pipeline engine.

pub mod encoder;
pub mod parser;

use crate::error::AssembleError;
use std::collections::BTreeMap;

pub const TEXT_BASE: u32 = 0x80;
pub const DATA_BASE: u32 = 0x00;

/// A single instruction as produced by the text front-end, operands
/// already normalized (memory-form `imm(rs1)` split into `[dest, base, imm]`).
#[derive(Clone, Debug)]
pub struct ParsedInstruction {
    pub mnemonic: String,
    pub operands: Vec<String>,
    pub address: u32,
    pub original_source_line: String,
}

/// Label name to resolved address.
pub type SymbolTable = BTreeMap<String, u32>;

/// Data address (stride 4, starting at [`DATA_BASE`]) to signed word value.
pub type DataSegment = BTreeMap<u32, i32>;

/// Instruction address to its encoded 32-bit word.
pub type InstructionImage = BTreeMap<u32, u32>;

/// The fully assembled program: ready to hand to a
/// [`crate::sim::Simulator`].
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub image: InstructionImage,
    pub data: DataSegment,
    pub listing: Vec<ParsedInstruction>,
}

/// Parses a decimal or `0x`-prefixed hexadecimal immediate literal.
/// Negative hex literals (`-0x...`) are accepted; returns `None` on any
/// other malformed token.
pub fn parse_immediate_literal(token: &str) -> Option<i64> {
    let token = token.trim();
    let (neg, rest) = match token.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, token),
    };
    let value = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        rest.parse::<i64>().ok()?
    };
    Some(if neg { -value } else { value })
}

/// Parses a register operand shaped `x<decimal>`, `0 <= decimal <= 31`.
pub fn parse_register(token: &str) -> Option<u32> {
    let token = token.trim();
    let digits = token.strip_prefix('x')?;
    let idx: u32 = digits.parse().ok()?;
    if idx <= 31 { Some(idx) } else { None }
}

/// Runs the front-end parser and the encoder over `source`, producing a
/// [`Program`]. The single entry point the embedding facade calls from
/// `initialize`.
pub fn assemble(source: &str) -> Result<Program, AssembleError> {
    let parsed = parser::parse(source)?;
    let image = encoder::translate(&parsed.instructions, &parsed.symbols)?;
    Ok(Program {
        image,
        data: parsed.data,
        listing: parsed.instructions,
    })
}
