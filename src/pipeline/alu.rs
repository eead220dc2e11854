//! The EX-stage arithmetic/logic unit.

use super::signals::AluOp;

/// Namespace for the pipeline's ALU dispatch, mirroring the table of
/// EX-stage operations.
pub struct Alu;

impl Alu {
    /// Executes `op` on signed 32-bit operands `a` and `b`.
    ///
    /// `Sll` shifts by `b & 0x1F`; `Slt` yields `1`/`0` from a signed
    /// comparison.
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a.wrapping_shl((b & 0x1F) as u32),
            AluOp::Slt => (a < b) as i32,
            AluOp::And => a & b,
        }
    }
}
