//! Text front-end: comment/whitespace stripping, directive handling,
//! and the two-pass symbol table / instruction list builder.
//!
//! Grounded in the original `parser.cpp`/`utils.cpp` two-pass design:
//! pass 1 walks the source assigning addresses to labels, pass 2 builds
//! the data segment and the parsed instruction list.

use super::{parse_immediate_literal, DataSegment, ParsedInstruction, SymbolTable, DATA_BASE, TEXT_BASE};
use crate::error::AssembleError;
use crate::isa;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Segment {
    Text,
    Data,
}

/// The two intermediate products of the front-end, handed to the encoder.
pub struct Parsed {
    pub symbols: SymbolTable,
    pub data: DataSegment,
    pub instructions: Vec<ParsedInstruction>,
}

struct Line<'a> {
    segment: Segment,
    label: Option<&'a str>,
    body: Option<&'a str>,
    original: &'a str,
}

fn strip_comment(line: &str) -> &str {
    let hash = line.find('#');
    let slashes = line.find("//");
    let cut = match (hash, slashes) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    match cut {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn tokenize(source: &str) -> Vec<Line<'_>> {
    let mut segment = Segment::Text;
    let mut out = Vec::new();
    for raw in source.lines() {
        let stripped = strip_comment(raw).trim();
        if stripped.is_empty() {
            continue;
        }
        if stripped.eq_ignore_ascii_case(".text") {
            segment = Segment::Text;
            continue;
        }
        if stripped.eq_ignore_ascii_case(".data") {
            segment = Segment::Data;
            continue;
        }
        if stripped.starts_with(".global") {
            continue;
        }

        let (label, rest) = match stripped.find(':') {
            Some(idx) => {
                let label = stripped[..idx].trim();
                let rest = stripped[idx + 1..].trim();
                (Some(label), rest)
            }
            None => (None, stripped),
        };

        out.push(Line {
            segment,
            label,
            body: if rest.is_empty() { None } else { Some(rest) },
            original: raw,
        });
    }
    out
}

fn split_operands(body: &str) -> Vec<String> {
    body.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Splits `imm(rs1)` into `(imm_token, rs1_token)`.
fn split_memory_operand(token: &str) -> Result<(String, String), AssembleError> {
    let open = token.find('(').ok_or_else(|| AssembleError::MalformedMemoryOperand(token.to_string()))?;
    let close = token.rfind(')').ok_or_else(|| AssembleError::MalformedMemoryOperand(token.to_string()))?;
    if close < open {
        return Err(AssembleError::MalformedMemoryOperand(token.to_string()));
    }
    let imm = token[..open].trim().to_string();
    let reg = token[open + 1..close].trim().to_string();
    if imm.is_empty() || reg.is_empty() {
        return Err(AssembleError::MalformedMemoryOperand(token.to_string()));
    }
    Ok((imm, reg))
}

pub fn parse(source: &str) -> Result<Parsed, AssembleError> {
    let lines = tokenize(source);

    // Pass 1: symbol table.
    let mut symbols = SymbolTable::new();
    let mut text_addr = TEXT_BASE;
    let mut data_addr = DATA_BASE;
    for line in &lines {
        if let Some(label) = line.label {
            if symbols.insert(label.to_string(), match line.segment {
                Segment::Text => text_addr,
                Segment::Data => data_addr,
            }).is_some() {
                return Err(AssembleError::DuplicateLabel(label.to_string()));
            }
        }
        if let Some(body) = line.body {
            match line.segment {
                Segment::Text => text_addr += 4,
                Segment::Data => {
                    if body.starts_with(".word") {
                        data_addr += 4;
                    }
                }
            }
        }
    }

    // Pass 2: data segment + instruction list.
    let mut data = DataSegment::new();
    let mut instructions = Vec::new();
    let mut text_addr = TEXT_BASE;
    let mut data_addr = DATA_BASE;
    for line in &lines {
        let Some(body) = line.body else { continue };
        match line.segment {
            Segment::Data => {
                if let Some(rest) = body.strip_prefix(".word") {
                    let literal = rest.trim();
                    let value = parse_immediate_literal(literal)
                        .ok_or_else(|| AssembleError::BadImmediate(literal.to_string()))?;
                    data.insert(data_addr, value as i32);
                    data_addr += 4;
                }
            }
            Segment::Text => {
                let mut parts = body.splitn(2, char::is_whitespace);
                let mnemonic = parts.next().unwrap_or("").to_string();
                let rest = parts.next().unwrap_or("").trim();
                isa::lookup(&mnemonic).ok_or_else(|| AssembleError::UnknownMnemonic(mnemonic.clone()))?;
                let mut operands = split_operands(rest);

                if matches!(mnemonic.as_str(), "lw" | "sw") {
                    // rd/rs2, imm(rs1) -> [dest, rs1, imm]
                    if operands.len() != 2 {
                        return Err(AssembleError::MalformedMemoryOperand(rest.to_string()));
                    }
                    let (imm, base) = split_memory_operand(&operands[1])?;
                    operands = vec![operands[0].clone(), base, imm];
                }

                instructions.push(ParsedInstruction {
                    mnemonic,
                    operands,
                    address: text_addr,
                    original_source_line: line.original.trim().to_string(),
                });
                text_addr += 4;
            }
        }
    }

    if instructions.is_empty() {
        return Err(AssembleError::EmptyProgram);
    }

    Ok(Parsed { symbols, data, instructions })
}
