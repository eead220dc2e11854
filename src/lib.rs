//! A RISC-V (RV32I subset) teaching assembler and 5-stage in-order
//! pipeline simulator.
//!
//! The assembler turns source text into an instruction image and data
//! segment in two passes; the pipeline engine then steps that image one
//! cycle at a time through classic IF/ID/EX/MEM/WB stages, with no
//! forwarding (hazards stall) and a non-standard but intentionally
//! preserved branch-target convention — see [`pipeline::engine`] for
//! the details.
//!
//! # Modules
//!
//! * `error`: typed assembly/config failures.
//! * `isa`: instruction formats, opcodes and the mnemonic table.
//! * `assembler`: two-pass text-to-image translation.
//! * `arch`: register file, data memory, PC and cycle counter.
//! * `pipeline`: the stage engine and its latches.
//! * `sim`: the embedding facade tying assembler, arch and pipeline together.
//! * `stats`: per-run counters and a report.
//! * `config`: TOML-backed run configuration.

/// Typed failure modes for assembly and configuration loading.
pub mod error;

/// Instruction formats, opcodes, and the mnemonic-to-encoding table.
pub mod isa;

/// Two-pass assembler: source text to instruction image and data segment.
pub mod assembler;

/// Architectural state: registers, data memory, program counter, cycles.
pub mod arch;

/// The 5-stage pipeline engine and its inter-stage latches.
pub mod pipeline;

/// The embedding facade: initialize, step, run, reset, peek/poke.
pub mod sim;

/// Per-run statistics and a human-readable report.
pub mod stats;

/// TOML-backed simulator configuration.
pub mod config;
