//! LS-8 Opcodes.
//!
//! Defines the opcode byte for every implemented instruction.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;

/// Print a register as a character.
pub const PRA: u8 = 0b0100_1000;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Bitwise AND of two registers.
pub const AND: u8 = 0b1010_1000;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Store a register to the address held in another register.
pub const ST: u8 = 0b1000_0100;

/// Assembly mnemonic for an opcode, or `None` if the opcode is not implemented.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    let name = match opcode {
        HLT => "HLT",
        LDI => "LDI",
        PRN => "PRN",
        PRA => "PRA",
        MUL => "MUL",
        ADD => "ADD",
        AND => "AND",
        CMP => "CMP",
        PUSH => "PUSH",
        POP => "POP",
        CALL => "CALL",
        RET => "RET",
        JMP => "JMP",
        JEQ => "JEQ",
        JNE => "JNE",
        ST => "ST",
        _ => return None,
    };
    Some(name)
}
