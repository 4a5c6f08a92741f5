use ls8_core::Simulator;
use ls8_core::common::SimError;
use ls8_core::config::Config;
use ls8_core::core::Cpu;

pub struct TestContext {
    pub sim: Simulator<Vec<u8>>,
}

impl TestContext {
    /// Loads `program` into a default-configured machine.
    pub fn new(program: &[u8]) -> Self {
        Self::with_config(&Config::default(), program)
    }

    pub fn with_config(config: &Config, program: &[u8]) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("ls8_core=debug")
            .try_init();

        let sim =
            Simulator::with_output(config, program, Vec::new()).expect("test program should load");
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Read a general-purpose register value.
    pub fn reg(&self, idx: usize) -> u8 {
        self.sim.cpu.regs.get(idx).expect("register index in range")
    }

    /// Executes a single instruction.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.sim.tick()
    }

    /// Executes `n` instructions, panicking on the first error.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step().expect("step should succeed");
        }
    }

    /// Runs to HLT or the first error.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.sim.run()
    }

    /// Console output written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.sim.output()).into_owned()
    }
}
