//! End-to-end assembler tests: source text to instruction image, and
//! the typed error variants the two-pass front-end raises.

use riscv_emulator::assembler::{assemble, TEXT_BASE};
use riscv_emulator::error::AssembleError;

#[test]
fn assembles_beq_to_forward_label() {
    let source = "
        beq x1, x2, SKIP
        addi x3, x0, 99
        SKIP:
        addi x4, x0, 1
    ";
    let program = assemble(source).unwrap();
    let word = program.image[&TEXT_BASE];
    assert_eq!(word, 0x00208463);
}

#[test]
fn assembles_jal_with_positive_offset() {
    let source = "
        jal x1, AHEAD
        addi x3, x0, 99
        addi x3, x0, 98
        addi x3, x0, 97
        AHEAD:
        addi x4, x0, 1
    ";
    let program = assemble(source).unwrap();
    assert_eq!(program.image[&TEXT_BASE], 0x010000EF);
}

#[test]
fn lw_sw_operands_canonicalize_through_memory_form() {
    let source = "
        sw x6, 0(x0)
        lw x5, 0(x0)
    ";
    let program = assemble(source).unwrap();
    assert_eq!(program.image.len(), 2);
}

#[test]
fn word_directive_populates_data_segment() {
    let source = "
        .data
        .word 0x12345678
        .text
        addi x1, x0, 1
    ";
    let program = assemble(source).unwrap();
    assert_eq!(program.data[&0], 0x12345678u32 as i32);
}

#[test]
fn unknown_mnemonic_is_rejected() {
    let err = assemble("frobnicate x1, x2, x3").unwrap_err();
    assert!(matches!(err, AssembleError::UnknownMnemonic(m) if m == "frobnicate"));
}

#[test]
fn unresolved_label_is_rejected() {
    let err = assemble("beq x1, x2, NOWHERE").unwrap_err();
    assert!(matches!(err, AssembleError::UnresolvedLabel(l) if l == "NOWHERE"));
}

#[test]
fn duplicate_label_is_rejected() {
    let source = "
        L: addi x1, x0, 1
        L: addi x2, x0, 2
    ";
    let err = assemble(source).unwrap_err();
    assert!(matches!(err, AssembleError::DuplicateLabel(l) if l == "L"));
}

#[test]
fn out_of_range_immediate_is_rejected() {
    let err = assemble("addi x1, x0, 5000").unwrap_err();
    assert!(matches!(err, AssembleError::ImmediateOutOfRange { .. }));
}

#[test]
fn empty_program_is_rejected() {
    let err = assemble("   \n# just a comment\n").unwrap_err();
    assert!(matches!(err, AssembleError::EmptyProgram));
}
