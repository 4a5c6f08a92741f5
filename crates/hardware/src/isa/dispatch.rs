//! Opcode Dispatch Table.
//!
//! Maps every implemented opcode byte to the plain function that executes it.
//! The table is built at compile time; lookups are a single array index.

use std::fmt;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::cpu::instructions as exec;

use super::opcodes::{
    ADD, AND, CALL, CMP, HLT, JEQ, JMP, JNE, LDI, MUL, POP, PRA, PRN, PUSH, RET, ST,
};

/// Instruction handler.
///
/// Receives the CPU with PC still pointing at the opcode, plus the opcode byte
/// itself. The handler reads its own operands and must leave PC at the next
/// instruction to execute.
pub type Handler = fn(&mut Cpu, u8) -> Result<(), Trap>;

/// Number of distinct opcode values.
const TABLE_SIZE: usize = 256;

/// Static opcode-to-handler mapping.
pub struct DispatchTable {
    handlers: [Option<Handler>; TABLE_SIZE],
}

/// The LS-8 dispatch table.
pub static DISPATCH: DispatchTable = DispatchTable::new();

impl DispatchTable {
    /// Builds the table of every implemented instruction.
    const fn new() -> Self {
        let mut handlers: [Option<Handler>; TABLE_SIZE] = [None; TABLE_SIZE];
        handlers[HLT as usize] = Some(exec::hlt);
        handlers[LDI as usize] = Some(exec::ldi);
        handlers[PRN as usize] = Some(exec::prn);
        handlers[PRA as usize] = Some(exec::pra);
        handlers[ADD as usize] = Some(exec::alu);
        handlers[MUL as usize] = Some(exec::alu);
        handlers[AND as usize] = Some(exec::alu);
        handlers[CMP as usize] = Some(exec::alu);
        handlers[PUSH as usize] = Some(exec::push);
        handlers[POP as usize] = Some(exec::pop);
        handlers[CALL as usize] = Some(exec::call);
        handlers[RET as usize] = Some(exec::ret);
        handlers[JMP as usize] = Some(exec::jmp);
        handlers[JEQ as usize] = Some(exec::jeq);
        handlers[JNE as usize] = Some(exec::jne);
        handlers[ST as usize] = Some(exec::st);
        Self { handlers }
    }

    /// Looks up the handler for `opcode`.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Handler> {
        self.handlers[opcode as usize]
    }

    /// Whether `opcode` has a handler.
    pub fn contains(&self, opcode: u8) -> bool {
        self.lookup(opcode).is_some()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field(
                "opcodes",
                &self.handlers.iter().filter(|h| h.is_some()).count(),
            )
            .finish()
    }
}
