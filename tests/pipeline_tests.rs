//! End-to-end pipeline scenarios from the testable-properties list:
//! simple retirement, RAW stalls, branch flush, and the load/store
//! round trip, all driven through the embedding facade.

use riscv_emulator::config::Config;
use riscv_emulator::sim::Simulator;

fn run(source: &str) -> Simulator {
    let mut sim = Simulator::initialize(source, &Config::default()).unwrap();
    sim.run().unwrap();
    sim
}

#[test]
fn single_addi_retires_with_expected_value() {
    let sim = run("addi x1, x0, 7");
    assert_eq!(sim.get_reg(1), 7);
    assert_eq!(sim.stats().instructions_retired, 1);
}

#[test]
fn raw_hazard_stalls_until_operand_is_written_back() {
    // `add x3,x1,x2` depends on x2 from the immediately preceding
    // instruction (dependency distance 1); with no forwarding and no
    // same-cycle write-then-read bypass in the register file, the
    // three-stage (EX/MEM/WB) hazard check re-stalls until that
    // producer has cleared WB, which takes three cycles.
    let sim = run("addi x1, x0, 5\naddi x2, x0, 3\nadd x3, x1, x2");
    assert_eq!(sim.get_reg(3), 8);
    assert_eq!(sim.stats().stalls, 3);
}

#[test]
fn taken_branch_flushes_the_two_speculatively_fetched_instructions() {
    let source = "
        addi x1, x0, 1
        beq x1, x1, SKIP
        addi x2, x0, 99
        SKIP:
        addi x3, x0, 7
    ";
    let sim = run(source);
    assert_eq!(sim.get_reg(2), 0);
    assert_eq!(sim.get_reg(3), 7);
    assert_eq!(sim.stats().branch_flushes, 1);
}

#[test]
fn not_taken_branch_only_advances_pc_by_four() {
    let source = "
        addi x1, x0, 1
        addi x2, x0, 2
        blt x2, x1, SKIP
        addi x3, x0, 42
        SKIP:
        addi x4, x0, 1
    ";
    let sim = run(source);
    assert_eq!(sim.get_reg(3), 42);
    assert_eq!(sim.stats().branch_flushes, 0);
}

#[test]
fn store_then_load_round_trips_a_word_little_endian() {
    let source = "
        addi x6, x0, 0x678
        sw x6, 0(x0)
        lw x5, 0(x0)
    ";
    let sim = run(source);
    assert_eq!(sim.get_reg(5), 0x678);
}

#[test]
fn x0_is_always_zero_even_after_a_write_targets_it() {
    let source = "
        addi x0, x0, 5
        addi x1, x0, 9
    ";
    let sim = run(source);
    assert_eq!(sim.get_reg(0), 0);
    assert_eq!(sim.get_reg(1), 9);
}

#[test]
fn reset_restores_initial_architectural_state() {
    let mut sim = Simulator::initialize("addi x1, x0, 7", &Config::default()).unwrap();
    sim.run().unwrap();
    assert_eq!(sim.get_reg(1), 7);

    sim.reset();
    assert_eq!(sim.get_reg(1), 0);
    assert_eq!(sim.get_pc(), riscv_emulator::assembler::TEXT_BASE);
    assert_eq!(sim.stats().cycles, 0);
}

#[test]
fn out_of_bounds_store_is_recorded_as_a_diagnostic_not_a_crash() {
    let source = "
        addi x1, x0, 1
        addi x2, x0, 2000
        sw x1, 0(x2)
    ";
    let sim = run(source);
    assert!(!sim.diagnostics().is_empty());
}
