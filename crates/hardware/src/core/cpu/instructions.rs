//! Instruction Handlers.
//!
//! One function per instruction, installed in the dispatch table
//! ([`crate::isa::dispatch::DISPATCH`]). Each handler is entered with PC on
//! its opcode, reads its own operands, applies its effects, and leaves PC on
//! the next instruction: either `PC + width` or an absolute jump target.
//! Handlers never call back into the execution loop.

use super::Cpu;
use crate::common::error::Trap;
use crate::core::arch::{Flags, RunState};
use crate::core::units::alu::{Alu, AluOp, AluResult};
use crate::isa::instruction::InstructionBits;

/// Moves PC past the current instruction.
#[inline]
fn advance(cpu: &mut Cpu, opcode: u8) {
    cpu.pc += opcode.width();
}

/// `HLT`: stops the execution loop.
///
/// # Errors
///
/// Never fails; the `Result` matches the handler signature.
pub fn hlt(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    cpu.state = RunState::Halted;
    advance(cpu, opcode);
    tracing::debug!(pc = cpu.pc, "halted");
    Ok(())
}

/// `LDI reg, imm`: loads an immediate byte.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] if an operand lies past the end of memory or
/// names a register outside `R0`-`R7`.
pub fn ldi(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let reg = cpu.operand(1)? as usize;
    let imm = cpu.operand(2)?;
    cpu.regs.set(reg, imm)?;
    advance(cpu, opcode);
    Ok(())
}

/// `PRN reg`: prints the register as a decimal number and a newline.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn prn(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let (_, val) = cpu.reg_operand(1)?;
    cpu.console.print_decimal(val);
    advance(cpu, opcode);
    Ok(())
}

/// `PRA reg`: prints the character whose code point is the register value.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn pra(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let (_, val) = cpu.reg_operand(1)?;
    cpu.console.print_char(val);
    advance(cpu, opcode);
    Ok(())
}

/// `ADD`, `MUL`, `AND`, `CMP`: two-register ALU operations.
///
/// The operation is selected by the opcode's identifier bits. Arithmetic and
/// logic results go to the first register; CMP only updates the flags.
///
/// # Errors
///
/// Returns [`Trap::UnsupportedOperation`] if the identifier names no ALU
/// operation, or [`Trap::OutOfRange`] for a bad operand.
pub fn alu(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let op = AluOp::decode(opcode)?;
    let (reg_a, a) = cpu.reg_operand(1)?;
    let (_, b) = cpu.reg_operand(2)?;
    match Alu::execute(op, a, b) {
        AluResult::Value(val) => cpu.regs.set(reg_a, val)?,
        AluResult::Flags(flags) => cpu.flags = Some(flags),
    }
    advance(cpu, opcode);
    Ok(())
}

/// `PUSH reg`: decrements SP, then stores the register at the new top of stack.
///
/// The register is read after the decrement, so `PUSH R7` stores the new SP.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn push(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let (reg, _) = cpu.reg_operand(1)?;
    let sp = cpu.regs.sp().wrapping_sub(1);
    cpu.regs.set_sp(sp);
    let val = cpu.regs.get(reg)?;
    cpu.ram.write(sp as usize, val)?;
    advance(cpu, opcode);
    Ok(())
}

/// `POP reg`: loads the top of stack into the register, then increments SP.
///
/// SP is incremented after the write, so `POP R7` leaves `R7` one past the
/// popped value.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn pop(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let reg = cpu.operand(1)? as usize;
    let val = cpu.ram.read(cpu.regs.sp() as usize)?;
    cpu.regs.set(reg, val)?;
    cpu.regs.set_sp(cpu.regs.sp().wrapping_add(1));
    advance(cpu, opcode);
    Ok(())
}

/// `CALL reg`: pushes the address of the next instruction and jumps to the register.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for a bad operand, or if the return address
/// does not fit in a byte.
pub fn call(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let (_, target) = cpu.reg_operand(1)?;
    let ret = cpu.pc + opcode.width();
    let ret = u8::try_from(ret).map_err(|_| Trap::memory(ret))?;
    cpu.push(ret)?;
    cpu.pc = target as usize;
    Ok(())
}

/// `RET`: pops the return address into PC.
///
/// # Errors
///
/// Propagates a memory trap from popping the return address.
pub fn ret(cpu: &mut Cpu, _opcode: u8) -> Result<(), Trap> {
    cpu.pc = cpu.pop()? as usize;
    Ok(())
}

/// `JMP reg`: jumps to the address in the register.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn jmp(cpu: &mut Cpu, _opcode: u8) -> Result<(), Trap> {
    let (_, target) = cpu.reg_operand(1)?;
    cpu.pc = target as usize;
    Ok(())
}

/// `JEQ reg`: jumps if the last compare found equality.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for a bad operand, whether or not the jump is taken.
pub fn jeq(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let equal = cpu.flags == Some(Flags::Equal);
    jump_if(cpu, opcode, equal)
}

/// `JNE reg`: jumps unless the last compare found equality.
///
/// With no compare executed yet the equal flag is clear, so this jumps.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for a bad operand, whether or not the jump is taken.
pub fn jne(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let equal = cpu.flags == Some(Flags::Equal);
    jump_if(cpu, opcode, !equal)
}

/// `ST reg_a, reg_b`: stores `reg_b` at the address held in `reg_a`.
///
/// # Errors
///
/// Returns [`Trap::OutOfRange`] for an operand past memory or an invalid register.
pub fn st(cpu: &mut Cpu, opcode: u8) -> Result<(), Trap> {
    let (_, addr) = cpu.reg_operand(1)?;
    let (_, val) = cpu.reg_operand(2)?;
    cpu.ram.write(addr as usize, val)?;
    advance(cpu, opcode);
    Ok(())
}

/// Shared body of the conditional jumps.
///
/// The target operand is validated even when the branch falls through.
fn jump_if(cpu: &mut Cpu, opcode: u8, taken: bool) -> Result<(), Trap> {
    let (_, target) = cpu.reg_operand(1)?;
    if taken {
        cpu.pc = target as usize;
    } else {
        advance(cpu, opcode);
    }
    Ok(())
}
