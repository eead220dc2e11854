//! Encoder bit-layout tests: literal expected words, range checks,
//! and immediate round-trips through the decoder used by the pipeline.

use riscv_emulator::assembler::encoder::{encode_b, encode_i, encode_j, encode_r, encode_s};
use riscv_emulator::isa::opcodes::*;

#[test]
fn beq_plus_8_matches_literal_word() {
    // beq x1, x2, +8
    assert_eq!(encode_b(1, 2, 8, FUNCT3_BEQ, OP_BRANCH), 0x00208463);
}

#[test]
fn jal_plus_16_matches_literal_word() {
    // jal x1, +16
    assert_eq!(encode_j(1, 16, OP_JAL), 0x010000EF);
}

#[test]
fn r_format_places_opcode_funct3_funct7_in_fixed_bits() {
    let word = encode_r(3, 1, 2, FUNCT3_ADD_SUB, FUNCT7_DEFAULT, OP_REG);
    assert_eq!(word & 0x7F, OP_REG);
    assert_eq!((word >> 12) & 0x7, FUNCT3_ADD_SUB);
    assert_eq!((word >> 25) & 0x7F, FUNCT7_DEFAULT);

    let sub = encode_r(3, 1, 2, FUNCT3_ADD_SUB, FUNCT7_SUB, OP_REG);
    assert_eq!((sub >> 25) & 0x7F, FUNCT7_SUB);
}

#[test]
fn i_format_immediate_round_trips_through_sign_extend() {
    for imm in [-2048, -1, 0, 1, 2047] {
        let word = encode_i(1, 2, imm, FUNCT3_ADD_SUB, OP_IMM);
        let decoded = (word as i32) >> 20;
        assert_eq!(decoded, imm);
    }
}

#[test]
fn slli_only_uses_low_five_shamt_bits_and_table_funct7() {
    use riscv_emulator::assembler::encoder::encode_i_shift;
    let word = encode_i_shift(1, 2, 0x1F, FUNCT3_SLL, FUNCT7_DEFAULT, OP_IMM);
    assert_eq!((word >> 20) & 0x1F, 0x1F);
    assert_eq!((word >> 25) & 0x7F, FUNCT7_DEFAULT);
}

#[test]
fn s_format_splits_immediate_across_two_fields() {
    let word = encode_s(1, 2, -4, FUNCT3_SLT, OP_STORE);
    let hi = (word >> 25) & 0x7F;
    let lo = (word >> 7) & 0x1F;
    let rebuilt = ((hi << 5) | lo) as i32;
    let sign_extended = (rebuilt << 20) >> 20;
    assert_eq!(sign_extended, -4);
}

#[test]
fn b_format_immediate_round_trips_across_its_full_even_range() {
    for imm in (-4096..=4094).step_by(2) {
        let word = encode_b(1, 2, imm, FUNCT3_BEQ, OP_BRANCH);
        let imm_12 = (word >> 31) & 0x1;
        let imm_11 = (word >> 7) & 0x1;
        let imm_10_5 = (word >> 25) & 0x3F;
        let imm_4_1 = (word >> 8) & 0xF;
        let rebuilt = (imm_12 << 12) | (imm_11 << 11) | (imm_10_5 << 5) | (imm_4_1 << 1);
        let sign_extended = ((rebuilt as i32) << 19) >> 19;
        assert_eq!(sign_extended, imm, "round trip failed for imm={imm}");
    }
}
