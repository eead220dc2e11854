//! RISC-V teaching assembler and pipeline simulator CLI.
//!
//! Assembles a source file, runs it to completion on the 5-stage
//! pipeline, and prints the assembly listing, final architectural
//! state and a stats report.

use clap::Parser;
use std::{fs, process};

use riscv_emulator::config::Config;
use riscv_emulator::sim::Simulator;

/// Command-line arguments for the assembler/simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V teaching assembler and pipeline simulator")]
struct Args {
    /// Assembly source file to assemble and run.
    source: String,

    #[arg(short, long, default_value = "")]
    config: String,

    /// Print a per-cycle pipeline trace to stderr.
    #[arg(long)]
    trace: bool,

    /// Override the configured cycle budget.
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut config = if args.config.is_empty() {
        Config::default()
    } else {
        match Config::load(&args.config) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    };
    if args.trace {
        config.general.trace = true;
    }
    if let Some(max_cycles) = args.max_cycles {
        config.general.max_cycles = max_cycles;
    }

    let source = match fs::read_to_string(&args.source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", args.source, e);
            process::exit(1);
        }
    };

    let mut sim = match Simulator::initialize(&source, &config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Assembly Listing");
    println!("--------------------");
    print!("{}", sim.get_assembly_listing());
    println!("--------------------");

    if let Err(e) = sim.run() {
        eprintln!("\n[!] FATAL: {}", e);
        sim.stats().print();
        process::exit(1);
    }

    println!("\nFinal Architectural State");
    println!("--------------------");
    println!("  pc = {:#010x}", sim.get_pc());
    for i in 0..32 {
        println!("  x{:<2} = {}", i, sim.get_reg(i));
    }
    println!("--------------------");

    for diag in sim.diagnostics() {
        eprintln!("[MEM] {}", diag);
    }

    sim.stats().print();
}
