//! Cycle/retirement/stall counters and a human-readable report,
//! grounded in the teacher's `SimStats` (manual `Default` for the
//! `Instant` field, box-drawn `print()` report).

use std::time::Instant;

/// Per-run counters surfaced to the CLI and available to embedders
/// via [`crate::sim::Simulator::stats`].
pub struct SimStats {
    pub cycles: u64,
    pub instructions_retired: u64,
    pub stalls: u64,
    pub branch_flushes: u64,
    pub memory_faults: u64,
    start_time: Instant,
}

impl Default for SimStats {
    fn default() -> Self {
        SimStats {
            cycles: 0,
            instructions_retired: 0,
            stalls: 0,
            branch_flushes: 0,
            memory_faults: 0,
            start_time: Instant::now(),
        }
    }
}

impl SimStats {
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    pub fn print(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        println!("---------------------------------------------");
        println!(" Simulation Statistics");
        println!("---------------------------------------------");
        println!(" Cycles               : {}", self.cycles);
        println!(" Instructions retired  : {}", self.instructions_retired);
        println!(" IPC                   : {:.3}", self.ipc());
        println!(" Hazard stalls         : {}", self.stalls);
        println!(" Branch flushes        : {}", self.branch_flushes);
        println!(" Memory faults         : {}", self.memory_faults);
        println!(" Wall time             : {:.3}s", elapsed);
        println!("---------------------------------------------");
    }
}
