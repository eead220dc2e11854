//! Bit-exact instruction encoder: one pure function per RISC-V format,
//! composed by [`translate`] into a full instruction image.
//!
//! Grounded in `original_source/cpp_files/encoder.cpp`; the bit layouts
//! below mirror `encodeRType`/`encodeIType`/`encodeSType`/`encodeBType`/
//! `encodeJType` and `translateToOpcode` exactly.

use super::{parse_immediate_literal, parse_register, InstructionImage, ParsedInstruction, SymbolTable};
use crate::error::AssembleError;
use crate::isa::{self, Format};

fn reg(token: &str) -> Result<u32, AssembleError> {
    parse_register(token).ok_or_else(|| AssembleError::BadRegister(token.to_string()))
}

fn imm_literal(token: &str, line: usize) -> Result<i64, AssembleError> {
    parse_immediate_literal(token).ok_or(AssembleError::ImmediateOutOfRange {
        value: 0,
        format: "literal",
        line,
    })
}

fn check_range(value: i64, lo: i64, hi: i64, format: &'static str, line: usize) -> Result<(), AssembleError> {
    if value < lo || value > hi {
        return Err(AssembleError::ImmediateOutOfRange { value, format, line });
    }
    Ok(())
}

/// `[31:25 funct7] [24:20 rs2] [19:15 rs1] [14:12 funct3] [11:7 rd] [6:0 opcode]`
pub fn encode_r(rd: u32, rs1: u32, rs2: u32, funct3: u32, funct7: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

/// Standard I-type: 12-bit signed immediate in bits 31..20.
pub fn encode_i(rd: u32, rs1: u32, imm: i32, funct3: u32, opcode: u32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    (imm_bits << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

/// `slli`-shaped I-type: shamt in 24..20, funct7 in 31..25.
pub fn encode_i_shift(rd: u32, rs1: u32, shamt: u32, funct3: u32, funct7: u32, opcode: u32) -> u32 {
    (funct7 << 25) | ((shamt & 0x1F) << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

/// `[31:25 imm[11:5]] [24:20 rs2] [19:15 rs1] [14:12 funct3] [11:7 imm[4:0]] [6:0 opcode]`
pub fn encode_s(rs1: u32, rs2: u32, imm: i32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm_11_5 = (imm >> 5) & 0x7F;
    let imm_4_0 = imm & 0x1F;
    (imm_11_5 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (imm_4_0 << 7) | opcode
}

/// `[31 imm[12]] [30:25 imm[10:5]] [24:20 rs2] [19:15 rs1] [14:12 funct3] [11:8 imm[4:1]] [7 imm[11]] [6:0 opcode]`
pub fn encode_b(rs1: u32, rs2: u32, imm: i32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm_12 = (imm >> 12) & 0x1;
    let imm_10_5 = (imm >> 5) & 0x3F;
    let imm_4_1 = (imm >> 1) & 0xF;
    let imm_11 = (imm >> 11) & 0x1;
    (imm_12 << 31) | (imm_10_5 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (imm_4_1 << 8) | (imm_11 << 7) | opcode
}

/// `[31 imm[20]] [30:21 imm[10:1]] [20 imm[11]] [19:12 imm[19:12]] [11:7 rd] [6:0 opcode]`
pub fn encode_j(rd: u32, imm: i32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm_20 = (imm >> 20) & 0x1;
    let imm_10_1 = (imm >> 1) & 0x3FF;
    let imm_11 = (imm >> 11) & 0x1;
    let imm_19_12 = (imm >> 12) & 0xFF;
    (imm_20 << 31) | (imm_10_1 << 21) | (imm_11 << 20) | (imm_19_12 << 12) | (rd << 7) | opcode
}

/// Encodes every instruction in `instructions`, resolving labels via
/// `symbols`, into an address-keyed instruction image.
pub fn translate(
    instructions: &[ParsedInstruction],
    symbols: &SymbolTable,
) -> Result<InstructionImage, AssembleError> {
    let mut image = InstructionImage::new();

    for (line, inst) in instructions.iter().enumerate() {
        let spec = isa::lookup(&inst.mnemonic)
            .ok_or_else(|| AssembleError::UnknownMnemonic(inst.mnemonic.clone()))?;
        let ops = &inst.operands;
        let address = inst.address;

        let word = match spec.format {
            Format::R => {
                let rd = reg(&ops[0])?;
                let rs1 = reg(&ops[1])?;
                let rs2 = reg(&ops[2])?;
                encode_r(rd, rs1, rs2, spec.funct3, spec.funct7, spec.opcode)
            }
            Format::I if inst.mnemonic == "lw" || inst.mnemonic == "jalr" => {
                // operands already canonicalized to [rd, rs1, imm] by the parser.
                let rd = reg(&ops[0])?;
                let rs1 = reg(&ops[1])?;
                let imm = imm_literal(&ops[2], line)?;
                check_range(imm, -2048, 2047, "I", line)?;
                encode_i(rd, rs1, imm as i32, spec.funct3, spec.opcode)
            }
            Format::I => {
                let rd = reg(&ops[0])?;
                let rs1 = reg(&ops[1])?;
                let imm = imm_literal(&ops[2], line)?;
                check_range(imm, -2048, 2047, "I", line)?;
                encode_i(rd, rs1, imm as i32, spec.funct3, spec.opcode)
            }
            Format::IShift => {
                let rd = reg(&ops[0])?;
                let rs1 = reg(&ops[1])?;
                let shamt = imm_literal(&ops[2], line)?;
                check_range(shamt, 0, 31, "I-shift", line)?;
                encode_i_shift(rd, rs1, shamt as u32, spec.funct3, spec.funct7, spec.opcode)
            }
            Format::S => {
                // operands canonicalized to [rs2/data, rs1/base, imm]; the
                // encoder swaps roles per the rs1/rs2 memory-form convention.
                let rs2 = reg(&ops[0])?;
                let rs1 = reg(&ops[1])?;
                let imm = imm_literal(&ops[2], line)?;
                check_range(imm, -2048, 2047, "S", line)?;
                encode_s(rs1, rs2, imm as i32, spec.funct3, spec.opcode)
            }
            Format::B => {
                let rs1 = reg(&ops[0])?;
                let rs2 = reg(&ops[1])?;
                let label = &ops[2];
                let target = *symbols
                    .get(label)
                    .ok_or_else(|| AssembleError::UnresolvedLabel(label.clone()))?;
                let offset = target as i64 - address as i64;
                check_range(offset, -4096, 4094, "B", line)?;
                encode_b(rs1, rs2, offset as i32, spec.funct3, spec.opcode)
            }
            Format::J => {
                let rd = reg(&ops[0])?;
                let label = &ops[1];
                let target = *symbols
                    .get(label)
                    .ok_or_else(|| AssembleError::UnresolvedLabel(label.clone()))?;
                let offset = target as i64 - address as i64;
                check_range(offset, -1_048_576, 1_048_574, "J", line)?;
                encode_j(rd, offset as i32, spec.opcode)
            }
        };

        image.insert(address, word);
    }

    Ok(image)
}
