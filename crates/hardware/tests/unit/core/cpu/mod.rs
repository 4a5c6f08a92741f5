/// Conditional and unconditional jumps, CALL and RET.
pub mod branches;
