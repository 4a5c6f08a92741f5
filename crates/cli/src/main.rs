//! LS-8 simulator CLI.
//!
//! This binary loads one program file and runs it to completion. It performs:
//! 1. **Loading:** Parses the base-2 program text into a memory image.
//! 2. **Execution:** Runs the image on a fresh machine, streaming PRN/PRA output to stdout.
//! 3. **Reporting:** On a fatal trap, dumps machine state to stderr; optionally prints statistics.
//!
//! Every failure class exits with its own status so scripts can tell them apart.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use ls8_core::Config;
use ls8_core::Simulator;
use ls8_core::common::{LoadError, SimError};
use ls8_core::isa::disasm;
use ls8_core::sim::loader;

/// Wrong number of arguments or an unusable option.
const EXIT_USAGE: u8 = 1;
/// Program file missing or unreadable.
const EXIT_UNREADABLE: u8 = 2;
/// Program has no instruction lines.
const EXIT_EMPTY: u8 = 3;
/// A program line is not a base-2 byte.
const EXIT_MALFORMED: u8 = 4;
/// Program does not fit in memory.
const EXIT_TOO_LARGE: u8 = 5;
/// The machine raised a fatal trap.
const EXIT_FAULT: u8 = 6;

const USAGE: &str =
    "usage: ls8 <program.ls8> [--trace] [--stats] [--disassemble] [--config <file.json>]";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 instruction-level simulator",
    long_about = "Run an LS-8 program: one base-2 byte per line, blank lines and `#` comments ignored.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/call.ls8\n  RUST_LOG=ls8_core=debug ls8 programs/stack.ls8"
)]
struct Cli {
    /// Program file to execute.
    program: PathBuf,

    /// Print a machine trace line to stderr before every instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Print a disassembly listing instead of running the program.
    #[arg(long)]
    disassemble: bool,

    /// JSON configuration file (see `ls8_core::config::Config`).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    config.general.trace_instructions |= cli.trace;
    tracing::debug!(program = %cli.program.display(), ?config, "starting");

    let program = match loader::load_program(&cli.program) {
        Ok(program) => program,
        Err(e) => return load_failure(&e),
    };

    if cli.disassemble {
        print!("{}", disasm::disassemble_image(&program));
        return ExitCode::SUCCESS;
    }

    let mut sim = match Simulator::new(&config, &program) {
        Ok(sim) => sim,
        Err(e) => return load_failure(&e),
    };

    let outcome = sim.run();
    if cli.stats {
        eprint!("{}", sim.cpu.stats);
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(SimError::Trap(trap)) => {
            eprintln!("\n[!] FATAL TRAP: {trap}");
            eprintln!("{}", sim.cpu.dump_state());
            ExitCode::from(EXIT_FAULT)
        }
        Err(SimError::Io(e)) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::from(EXIT_FAULT)
        }
    }
}

/// Builds the run configuration: defaults, or the JSON file given with `--config`.
fn load_config(cli: &Cli) -> Result<Config, String> {
    let Some(path) = &cli.config else {
        return Ok(Config::default());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("couldn't read config {}: {e}", path.display()))?;
    Config::from_json(&json).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

/// Reports a load failure and maps it to its exit status.
fn load_failure(err: &LoadError) -> ExitCode {
    eprintln!("{err}");
    let code = match err {
        LoadError::Io { .. } => EXIT_UNREADABLE,
        LoadError::Empty => EXIT_EMPTY,
        LoadError::Malformed { .. } => EXIT_MALFORMED,
        LoadError::TooLarge { .. } => EXIT_TOO_LARGE,
    };
    ExitCode::from(code)
}
