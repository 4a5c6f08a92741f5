//! # Statistics Tests
//!
//! Verifies that [`SimStats`] classifies retired instructions and renders its report.

use ls8_core::isa::opcodes::{ADD, CALL, HLT, JEQ, LDI, PRA, PUSH, ST};
use ls8_core::stats::SimStats;

use crate::common::builder::Program;
use crate::common::harness::TestContext;

#[test]
fn test_record_classifies_each_opcode() {
    let mut stats = SimStats::default();
    for op in [ADD, LDI, ST, PUSH, CALL, PRA, HLT] {
        stats.record(op, false);
    }
    stats.record(JEQ, true);
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_load_store, 2);
    assert_eq!(stats.inst_stack, 1);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.branches_taken, 1);
}

#[test]
fn test_run_counts_retired_instructions() {
    // 0: LDI R0,11  3: PUSH R0  5: POP R1  7: CALL R1  9: HLT  10: HLT  11: HLT
    let program = Program::new()
        .ldi(0, 11)
        .push(0)
        .pop(1)
        .call(1)
        .hlt()
        .hlt()
        .hlt()
        .build();
    let mut ctx = TestContext::new(&program);
    ctx.run().unwrap();
    let stats = &ctx.cpu().stats;
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.inst_load_store, 1);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.inst_system, 1);
}

#[test]
fn test_report_sections() {
    let mut stats = SimStats::default();
    stats.record(JEQ, false);
    let report = stats.to_string();
    assert!(report.contains("LS-8 SIMULATION STATISTICS"));
    assert!(report.contains("sim_insts                1"));
    assert!(report.contains("op.branch              1 (100.00%)"));
    assert!(report.contains("branch.fallthrough     1"));
}

#[test]
fn test_empty_report_has_no_nan() {
    let report = SimStats::default().to_string();
    assert!(!report.contains("NaN"));
    assert!(report.contains("op.alu                 0 (0.00%)"));
}
