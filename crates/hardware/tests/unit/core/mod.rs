
/// Instruction handlers and the execution loop.
pub mod cpu;
