//! # Simulator Tests
//!
//! Whole programs from source text through to captured console output.

use std::io::{self, Write};

use ls8_core::Simulator;
use ls8_core::common::{LoadError, SimError};
use ls8_core::config::Config;
use ls8_core::sim::loader::parse_program;
use pretty_assertions::assert_eq;

const MULT: &str = "\
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";

const CALL: &str = "\
# Doubles and prints a sequence of numbers through a subroutine.
10000010 # LDI R1,MULT2PRINT
00000001
00011000
10000010 # LDI R0,10
00000000
00001010
01010000 # CALL R1
00000001
10000010 # LDI R0,15
00000000
00001111
01010000 # CALL R1
00000001
10000010 # LDI R0,18
00000000
00010010
01010000 # CALL R1
00000001
10000010 # LDI R0,30
00000000
00011110
01010000 # CALL R1
00000001
00000001 # HLT
# MULT2PRINT (address 24):
10100000 # ADD R0,R0
00000000
00000000
01000111 # PRN R0
00000000
00010001 # RET
";

fn run_source(source: &str) -> (Result<(), SimError>, String) {
    let program = parse_program(source).unwrap();
    let mut sim = Simulator::with_output(&Config::default(), &program, Vec::new()).unwrap();
    let result = sim.run();
    let out = String::from_utf8(sim.into_output()).unwrap();
    (result, out)
}

#[test]
fn test_mult_program() {
    let (result, out) = run_source(MULT);
    assert!(result.is_ok());
    assert_eq!(out, "72\n");
}

#[test]
fn test_call_program() {
    let (result, out) = run_source(CALL);
    assert!(result.is_ok());
    assert_eq!(out, "20\n30\n36\n60\n");
}

#[test]
fn test_tick_forwards_output_per_instruction() {
    let program = parse_program(MULT).unwrap();
    let mut sim = Simulator::with_output(&Config::default(), &program, Vec::new()).unwrap();
    for _ in 0..3 {
        sim.tick().unwrap();
    }
    assert!(sim.output().is_empty());
    sim.tick().unwrap();
    assert_eq!(sim.output(), b"72\n");
    assert!(sim.cpu.console.pending().is_empty());
    assert!(!sim.is_halted());
    sim.tick().unwrap();
    assert!(sim.is_halted());
}

#[test]
fn test_empty_image_is_rejected() {
    let result = Simulator::with_output(&Config::default(), &[], Vec::new());
    assert!(matches!(result, Err(LoadError::Empty)));
}

/// Writer that refuses every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_host_write_failure_is_reported() {
    let program = parse_program(MULT).unwrap();
    let mut sim = Simulator::with_output(&Config::default(), &program, BrokenPipe).unwrap();
    let err = sim.run().unwrap_err();
    assert!(matches!(err, SimError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
