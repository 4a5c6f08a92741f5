//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 simulator. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by class (ALU, load/store, stack, branch, I/O, system).
//! 3. **Control flow:** Taken versus fall-through branches.

use std::fmt;
use std::time::Instant;

use crate::isa::instruction::InstructionClass;

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Simulation statistics structure tracking all execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired (ADD, MUL, AND, CMP).
    pub inst_alu: u64,
    /// Count of load/store instructions retired (LDI, ST).
    pub inst_load_store: u64,
    /// Count of stack instructions retired (PUSH, POP).
    pub inst_stack: u64,
    /// Count of control-transfer instructions retired (CALL, RET, JMP, JEQ, JNE).
    pub inst_branch: u64,
    /// Count of console output instructions retired (PRN, PRA).
    pub inst_io: u64,
    /// Count of system instructions retired (HLT).
    pub inst_system: u64,

    /// Control transfers that left the fall-through path.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The retired opcode.
    /// * `taken` - Whether a control transfer left the fall-through path.
    pub const fn record(&mut self, opcode: u8, taken: bool) {
        self.instructions_retired += 1;
        match InstructionClass::of(opcode) {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::LoadStore => self.inst_load_store += 1,
            InstructionClass::Stack => self.inst_stack += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Io => self.inst_io += 1,
            InstructionClass::System => self.inst_system += 1,
        }
        if taken {
            self.branches_taken += 1;
        }
    }
}

impl fmt::Display for SimStats {
    /// Renders the statistics report.
    ///
    /// Percentages divide by `max(instructions_retired, 1)`, so an empty run
    /// prints zeros rather than NaN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "{RULE}")?;
        writeln!(f, "LS-8 SIMULATION STATISTICS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_mips                 {mips:.2}")?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "INSTRUCTION MIX")?;
        let mix = [
            ("op.alu", self.inst_alu),
            ("op.load_store", self.inst_load_store),
            ("op.stack", self.inst_stack),
            ("op.branch", self.inst_branch),
            ("op.io", self.inst_io),
            ("op.system", self.inst_system),
        ];
        for (name, count) in mix {
            writeln!(f, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(
            f,
            "  branch.fallthrough     {}",
            self.inst_branch.saturating_sub(self.branches_taken)
        )?;
        writeln!(f, "{RULE}")
    }
}
