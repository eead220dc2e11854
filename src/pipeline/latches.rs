//! Double-buffered inter-stage latches.
//!
//! Each latch pairs a "current" snapshot (what stages read this cycle)
//! with a "next" snapshot (what stages write this cycle); `commit`
//! moves next into current at the end of a `step`. A snapshot whose
//! `ir` field is zero is a bubble and must not produce architectural
//! effects — see the module docs on [`crate::pipeline::engine`] for why
//! stages run in reverse order against this shape.

use super::signals::ControlSignals;

/// A double-buffered pair of snapshots for one inter-stage latch.
#[derive(Clone, Debug, Default)]
pub struct Latch<T: Default + Clone> {
    pub current: T,
    pub next: T,
}

impl<T: Default + Clone> Latch<T> {
    pub fn commit(&mut self) {
        self.current = std::mem::take(&mut self.next);
    }

    pub fn reset(&mut self) {
        self.current = T::default();
        self.next = T::default();
    }
}

#[derive(Clone, Debug, Default)]
pub struct IfIdEntry {
    pub pc: u32,
    pub npc: u32,
    pub ir: u32,
}

#[derive(Clone, Debug, Default)]
pub struct IdExEntry {
    pub ir: u32,
    pub npc: u32,
    pub a: i32,
    pub b: i32,
    pub imm: i32,
    pub opcode: u32,
    pub funct3: u32,
    pub funct7: u32,
    pub rd: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub ctrl: ControlSignals,
}

#[derive(Clone, Debug, Default)]
pub struct ExMemEntry {
    pub ir: u32,
    pub alu_output: i32,
    pub b: i32,
    pub cond: bool,
    pub rd: u32,
    pub ctrl: ControlSignals,
}

#[derive(Clone, Debug, Default)]
pub struct MemWbEntry {
    pub ir: u32,
    pub alu_output: i32,
    pub lmd: i32,
    pub rd: u32,
    pub reg_write: bool,
}

pub type IfIdLatch = Latch<IfIdEntry>;
pub type IdExLatch = Latch<IdExEntry>;
pub type ExMemLatch = Latch<ExMemEntry>;
pub type MemWbLatch = Latch<MemWbEntry>;
