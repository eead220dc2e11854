//! Control signals produced by the ID stage and carried down the
//! pipeline to steer EX/MEM/WB.

/// ALU operations this pipeline's EX stage can dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Default value (no operation); also `add`/`addi`/address generation.
    #[default]
    Add,
    /// Integer subtraction (`sub`).
    Sub,
    /// Shift left logical (`sll`/`slli`).
    Sll,
    /// Set less than, signed (`slt`).
    Slt,
    /// Bitwise AND (`and`).
    And,
}

/// Control signals decoded from an instruction's opcode/funct3/funct7,
/// carried through ID/EX, EX/MEM, and (where relevant) MEM/WB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register in WB.
    pub reg_write: bool,
    /// Instruction is a load (`lw`); MEM stage reads data memory.
    pub mem_read: bool,
    /// Instruction is a store (`sw`); MEM stage writes data memory.
    pub mem_write: bool,
    /// Instruction is a conditional branch (`beq`/`blt`).
    pub branch: bool,
}
