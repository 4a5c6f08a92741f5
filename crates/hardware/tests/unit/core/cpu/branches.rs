//! # Control Transfer Tests
//!
//! Addresses in the programs below are spelled out; every instruction width
//! is `1 + operand count`.

use ls8_core::common::{SP_INIT, Trap};

use crate::common::builder::Program;
use crate::common::harness::TestContext;

#[test]
fn test_jmp_sets_pc_absolutely() {
    // 0: LDI R0,6  3: JMP R0  5: HLT  6: HLT
    let program = Program::new().ldi(0, 6).jmp(0).hlt().hlt();
    let mut ctx = TestContext::new(&program.build());
    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc, 6);
    ctx.run().unwrap();
    assert_eq!(ctx.cpu().pc, 7);
}

#[test]
fn test_call_pushes_return_address_and_ret_resumes() {
    // 0: LDI R1,8  3: CALL R1  5: PRN R0  7: HLT  8: LDI R0,42  11: RET
    let program = Program::new()
        .ldi(1, 8)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(0, 42)
        .ret();
    let mut ctx = TestContext::new(&program.build());
    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc, 8);
    assert_eq!(ctx.cpu().regs.sp(), SP_INIT - 1);
    assert_eq!(ctx.cpu().ram.read(usize::from(SP_INIT - 1)), Ok(5));

    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc, 5);
    assert_eq!(ctx.cpu().regs.sp(), SP_INIT);

    ctx.run().unwrap();
    assert_eq!(ctx.output(), "42\n");
}

#[test]
fn test_nested_calls_unwind_in_order() {
    // 0: LDI R1,12  3: LDI R2,18  6: CALL R1  8: PRN R0  10: HLT  11: HLT
    // 12: CALL R2  14: ADD R0,R0  17: RET
    // 18: LDI R0,21  21: RET
    let program = Program::new()
        .ldi(1, 12)
        .ldi(2, 18)
        .call(1)
        .prn(0)
        .hlt()
        .hlt()
        .call(2)
        .add(0, 0)
        .ret()
        .ldi(0, 21)
        .ret();
    let mut ctx = TestContext::new(&program.build());
    ctx.run().unwrap();
    assert_eq!(ctx.output(), "42\n");
    assert_eq!(ctx.cpu().regs.sp(), SP_INIT);
}

#[test]
fn test_jeq_taken_after_equal_compare() {
    // 0: LDI R0,5  3: LDI R1,5  6: LDI R2,16  9: CMP R0,R1  12: JEQ R2  14: PRN R0  16: HLT
    let program = Program::new()
        .ldi(0, 5)
        .ldi(1, 5)
        .ldi(2, 16)
        .cmp(0, 1)
        .jeq(2)
        .prn(0)
        .hlt();
    let mut ctx = TestContext::new(&program.build());
    ctx.run().unwrap();
    assert_eq!(ctx.output(), "");
    assert_eq!(ctx.cpu().pc, 17);
}

#[test]
fn test_jeq_falls_through_on_inequality() {
    let program = Program::new()
        .ldi(0, 5)
        .ldi(1, 6)
        .ldi(2, 16)
        .cmp(0, 1)
        .jeq(2)
        .prn(0)
        .hlt();
    let mut ctx = TestContext::new(&program.build());
    ctx.step_n(5);
    assert_eq!(ctx.cpu().pc, 14);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), "5\n");
}

#[test]
fn test_jne_loop_counts_to_limit() {
    // 0: LDI R0,0  3: LDI R1,1  6: LDI R2,3  9: LDI R3,12
    // 12: PRN R0  14: ADD R0,R1  17: CMP R0,R2  20: JNE R3  22: HLT
    let program = Program::new()
        .ldi(0, 0)
        .ldi(1, 1)
        .ldi(2, 3)
        .ldi(3, 12)
        .prn(0)
        .add(0, 1)
        .cmp(0, 2)
        .jne(3)
        .hlt();
    let mut ctx = TestContext::new(&program.build());
    ctx.run().unwrap();
    assert_eq!(ctx.output(), "0\n1\n2\n");
    assert_eq!(ctx.cpu().stats.branches_taken, 2);
    assert_eq!(ctx.cpu().stats.inst_branch, 3);
}

#[test]
fn test_conditional_jumps_before_any_compare() {
    // No compare has run, so the equal flag is clear.
    // 0: LDI R0,8  3: JEQ R0  5: JNE R0  7: HLT  8: HLT
    let program = Program::new().ldi(0, 8).jeq(0).jne(0).hlt().hlt();
    let mut ctx = TestContext::new(&program.build());
    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc, 5);
    ctx.step_n(1);
    assert_eq!(ctx.cpu().pc, 8);
}

#[test]
fn test_untaken_jump_still_checks_register() {
    let program = Program::new().ldi(0, 1).ldi(1, 2).cmp(0, 1).jeq(8).hlt();
    let mut ctx = TestContext::new(&program.build());
    let err = ctx.run().unwrap_err();
    assert_eq!(err.to_string(), Trap::register(8).to_string());
}
