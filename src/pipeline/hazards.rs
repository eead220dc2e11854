//! RAW hazard detection for the no-forwarding pipeline.
//!
//! Without a forwarding network, a value written by an instruction
//! currently in EX, MEM, or WB is not yet visible to an instruction
//! being decoded in ID. The check below inspects all three producer
//! latches' *current* snapshots — the instructions structurally
//! occupying those stages this cycle — against the consumer's operand
//! registers.

use super::latches::{ExMemEntry, IdExEntry, MemWbEntry};

/// Returns `true` if decoding an instruction that needs `rs1`
/// (`needs_rs1`) and/or `rs2` (`needs_rs2`) must stall because a prior
/// in-flight instruction in EX, MEM, or WB will write one of them.
pub fn detect(
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
    rs1: u32,
    rs2: u32,
    needs_rs1: bool,
    needs_rs2: bool,
) -> bool {
    let producers = [
        (id_ex.ctrl.reg_write, id_ex.rd),
        (ex_mem.ctrl.reg_write, ex_mem.rd),
        (mem_wb.reg_write, mem_wb.rd),
    ];

    producers.iter().any(|&(writes, rd)| {
        if !writes || rd == 0 {
            return false;
        }
        (needs_rs1 && rd == rs1) || (needs_rs2 && rd == rs2)
    })
}
