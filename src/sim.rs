//! The embedding facade: initialize/step/run/reset, register and
//! memory peek/poke, and a snapshot of the pipeline latches for
//! external display.

use crate::arch::ArchState;
use crate::assembler::{self, Program, TEXT_BASE};
use crate::config::Config;
use crate::error::AssembleError;
use crate::pipeline::engine::PipelineSnapshot;
use crate::pipeline::Engine;
use crate::stats::SimStats;

/// A fully assembled, runnable simulator instance.
///
/// There is no "uninitialized" state to guard against in this API:
/// [`Simulator::initialize`] is the only constructor, so a `Simulator`
/// value is always ready to `step`.
pub struct Simulator {
    program: Program,
    state: ArchState,
    engine: Engine,
    stats: SimStats,
    diagnostics: Vec<String>,
    trace: bool,
    max_cycles: u64,
}

impl Simulator {
    /// Assembles `source` and builds a fresh simulator loaded with its
    /// instruction image and data segment.
    pub fn initialize(source: &str, config: &Config) -> Result<Simulator, AssembleError> {
        let program = assembler::assemble(source)?;
        let mut state = ArchState::new(TEXT_BASE);
        load_data_segment(&mut state, &program);
        Ok(Simulator {
            program,
            state,
            engine: Engine::new(),
            stats: SimStats::default(),
            diagnostics: Vec::new(),
            trace: config.general.trace,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Advances one cycle.
    pub fn step(&mut self) -> Result<(), String> {
        let report = self.engine.step(&mut self.state, &self.program.image);
        if report.retired {
            self.stats.instructions_retired += 1;
        }
        if report.branch_flushed {
            self.stats.branch_flushes += 1;
        }
        if !report.branch_flushed && report.stalled {
            self.stats.stalls += 1;
        }
        if let Some(fault) = report.memory_fault {
            self.stats.memory_faults += 1;
            if self.trace {
                eprintln!("[MEM] {}", fault);
            }
            self.diagnostics.push(fault);
        }
        self.stats.cycles += 1;
        if self.trace {
            self.trace_cycle();
        }
        Ok(())
    }

    /// Steps until `pc` advances past the last instruction address or
    /// `max_cycles` elapses.
    pub fn run(&mut self) -> Result<(), String> {
        let last_addr = self.program.image.keys().copied().max().unwrap_or(TEXT_BASE);
        let mut cycles = 0u64;
        while self.state.pc <= last_addr + 4 && cycles < self.max_cycles {
            self.step()?;
            cycles += 1;
        }
        Ok(())
    }

    /// Zeroes architectural state and pipeline latches, then reloads
    /// the data segment. The instruction image is unchanged.
    pub fn reset(&mut self) {
        self.state = ArchState::new(TEXT_BASE);
        load_data_segment(&mut self.state, &self.program);
        self.engine.reset();
        self.stats = SimStats::default();
        self.diagnostics.clear();
    }

    pub fn get_pc(&self) -> u32 {
        self.state.pc
    }

    pub fn get_reg(&self, idx: u32) -> i32 {
        if idx >= 32 {
            return 0;
        }
        self.state.read_reg(idx)
    }

    pub fn get_mem_byte(&self, addr: u32) -> Option<u8> {
        self.state.read_mem_byte(addr)
    }

    pub fn get_mem_word(&self, addr: u32) -> Option<u32> {
        self.state.read_mem_word(addr)
    }

    /// Writes `value` to register `idx`. Rejects `idx == 0` and
    /// `idx >= 32` with an `ERROR:`-prefixed status, matching the
    /// facade's invariant-violation convention.
    pub fn set_reg(&mut self, idx: u32, value: i32) -> Result<(), String> {
        if idx == 0 || idx >= 32 {
            return Err(format!("ERROR: register index {} out of range", idx));
        }
        self.state.write_reg(idx, value);
        Ok(())
    }

    pub fn set_mem_byte(&mut self, addr: u32, value: u8) -> Result<(), String> {
        if self.state.write_mem_byte(addr, value) {
            Ok(())
        } else {
            Err(format!("ERROR: address {} out of range", addr))
        }
    }

    pub fn set_mem_word(&mut self, addr: u32, value: u32) -> Result<(), String> {
        if self.state.write_mem_word(addr, value) {
            Ok(())
        } else {
            Err(format!("ERROR: address {} out of range", addr))
        }
    }

    pub fn get_pipeline_state(&self) -> PipelineSnapshot {
        self.engine.snapshot()
    }

    /// Columns: `address | machine_word_hex | original_source`.
    pub fn get_assembly_listing(&self) -> String {
        let mut out = String::new();
        for inst in &self.program.listing {
            let word = self.program.image.get(&inst.address).copied().unwrap_or(0);
            out.push_str(&format!(
                "{:#06x} | {:#010x} | {}\n",
                inst.address, word, inst.original_source_line
            ));
        }
        out
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn trace_cycle(&self) {
        let s = self.engine.snapshot();
        eprintln!(
            "cycle={} IF:{:#010x} -> ID:{:#010x} -> EX:{:#010x} -> WB:{:#010x}",
            self.state.cycle, s.if_id.ir, s.id_ex.ir, s.ex_mem.ir, s.mem_wb.ir
        );
    }
}

fn load_data_segment(state: &mut ArchState, program: &Program) {
    for (&addr, &value) in &program.data {
        state.write_mem_word(addr, value as u32);
    }
}
