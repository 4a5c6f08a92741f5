//! # Console Device Tests

use ls8_core::soc::Console;

#[test]
fn test_print_decimal_appends_newline() {
    let mut console = Console::new();
    console.print_decimal(0);
    console.print_decimal(42);
    console.print_decimal(255);
    assert_eq!(console.pending(), b"0\n42\n255\n");
}

#[test]
fn test_print_char_has_no_newline() {
    let mut console = Console::new();
    for byte in *b"ok" {
        console.print_char(byte);
    }
    assert_eq!(console.pending(), b"ok");
}

#[test]
fn test_take_drains_buffer() {
    let mut console = Console::new();
    console.print_decimal(7);
    assert_eq!(console.take(), b"7\n".to_vec());
    assert!(console.pending().is_empty());
}

#[test]
fn test_flush_to_writer_in_order() {
    let mut console = Console::new();
    let mut out = Vec::new();
    console.print_char(b'A');
    console.flush_to(&mut out).unwrap();
    console.print_decimal(1);
    console.flush_to(&mut out).unwrap();
    assert_eq!(out, b"A1\n");
    assert!(console.pending().is_empty());
}
