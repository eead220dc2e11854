//! The instruction set table: the static mapping from mnemonic to
//! its encoding format, opcode, and funct fields.

/// Standard RISC-V opcode, funct3 and funct7 constants used by the
/// table below and consulted again by the pipeline's EX stage.
pub mod opcodes {
    pub const OP_REG: u32 = 0x33;
    pub const OP_IMM: u32 = 0x13;
    pub const OP_LOAD: u32 = 0x03;
    pub const OP_STORE: u32 = 0x23;
    pub const OP_BRANCH: u32 = 0x63;
    pub const OP_JAL: u32 = 0x6f;
    pub const OP_JALR: u32 = 0x67;

    pub const FUNCT3_ADD_SUB: u32 = 0x0;
    pub const FUNCT3_SLL: u32 = 0x1;
    pub const FUNCT3_SLT: u32 = 0x2;
    pub const FUNCT3_AND: u32 = 0x7;
    pub const FUNCT3_BEQ: u32 = 0x0;
    pub const FUNCT3_BLT: u32 = 0x4;

    pub const FUNCT7_DEFAULT: u32 = 0x00;
    pub const FUNCT7_SUB: u32 = 0x20;
}

/// The five RISC-V instruction encoding formats this assembler supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    R,
    I,
    /// The `slli`-shaped pseudo-I-type: shamt in bits 24..20, funct7 in 31..25.
    IShift,
    S,
    B,
    J,
}

/// A single instruction set table entry.
#[derive(Clone, Copy, Debug)]
pub struct InstructionSpec {
    pub mnemonic: &'static str,
    pub format: Format,
    pub opcode: u32,
    pub funct3: u32,
    pub funct7: u32,
}

use opcodes::*;

/// The read-only instruction set table.
///
/// Covers the minimum mandated set: R-format `add sub sll slt and`;
/// I-format `addi slli lw jalr`; S-format `sw`; B-format `beq blt`;
/// J-format `jal`.
pub const TABLE: &[InstructionSpec] = &[
    InstructionSpec { mnemonic: "add", format: Format::R, opcode: OP_REG, funct3: FUNCT3_ADD_SUB, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "sub", format: Format::R, opcode: OP_REG, funct3: FUNCT3_ADD_SUB, funct7: FUNCT7_SUB },
    InstructionSpec { mnemonic: "sll", format: Format::R, opcode: OP_REG, funct3: FUNCT3_SLL, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "slt", format: Format::R, opcode: OP_REG, funct3: FUNCT3_SLT, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "and", format: Format::R, opcode: OP_REG, funct3: FUNCT3_AND, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "addi", format: Format::I, opcode: OP_IMM, funct3: FUNCT3_ADD_SUB, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "slli", format: Format::IShift, opcode: OP_IMM, funct3: FUNCT3_SLL, funct7: FUNCT7_DEFAULT },
    InstructionSpec { mnemonic: "lw", format: Format::I, opcode: OP_LOAD, funct3: 0x2, funct7: 0 },
    InstructionSpec { mnemonic: "jalr", format: Format::I, opcode: OP_JALR, funct3: 0x0, funct7: 0 },
    InstructionSpec { mnemonic: "sw", format: Format::S, opcode: OP_STORE, funct3: 0x2, funct7: 0 },
    InstructionSpec { mnemonic: "beq", format: Format::B, opcode: OP_BRANCH, funct3: FUNCT3_BEQ, funct7: 0 },
    InstructionSpec { mnemonic: "blt", format: Format::B, opcode: OP_BRANCH, funct3: FUNCT3_BLT, funct7: 0 },
    InstructionSpec { mnemonic: "jal", format: Format::J, opcode: OP_JAL, funct3: 0, funct7: 0 },
];

/// Looks up a mnemonic's table entry, case-sensitive.
pub fn lookup(mnemonic: &str) -> Option<&'static InstructionSpec> {
    TABLE.iter().find(|e| e.mnemonic == mnemonic)
}
