//! LS-8 Disassembler.
//!
//! Converts an opcode and its operand bytes into a human-readable assembly
//! string for debug tracing and fatal-error reports.

use super::instruction::InstructionBits;
use super::opcodes::{self, LDI};

/// Disassembles one instruction.
///
/// `a` and `b` are the two bytes following the opcode; bytes beyond the
/// opcode's operand count are ignored. Register operands render as `R<n>`,
/// LDI's immediate as a decimal number.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::disasm::disassemble;
/// use ls8_core::isa::opcodes;
///
/// assert_eq!(disassemble(opcodes::LDI, 0, 8), "LDI R0,8");
/// assert_eq!(disassemble(opcodes::PRN, 0, 0), "PRN R0");
/// assert_eq!(disassemble(opcodes::HLT, 0, 0), "HLT");
/// assert_eq!(disassemble(0xFF, 0, 0), "??? 0xff");
/// ```
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(name) = opcodes::mnemonic(opcode) else {
        return format!("??? {opcode:#04x}");
    };
    match (opcode, opcode.operand_count()) {
        (LDI, _) => format!("{name} R{a},{b}"),
        (_, 0) => name.to_string(),
        (_, 1) => format!("{name} R{a}"),
        _ => format!("{name} R{a},R{b}"),
    }
}

/// Disassembles every instruction in `image`, one per line, prefixed with its address.
///
/// Undecodable bytes are emitted one at a time so the listing resynchronises on
/// the next byte.
pub fn disassemble_image(image: &[u8]) -> String {
    let mut lines = Vec::new();
    let mut addr = 0;
    while let Some(&opcode) = image.get(addr) {
        let a = image.get(addr + 1).copied().unwrap_or(0);
        let b = image.get(addr + 2).copied().unwrap_or(0);
        lines.push(format!("{addr:02X}: {}\n", disassemble(opcode, a, b)));
        addr += if opcodes::mnemonic(opcode).is_some() {
            opcode.width()
        } else {
            1
        };
    }
    lines.concat()
}
