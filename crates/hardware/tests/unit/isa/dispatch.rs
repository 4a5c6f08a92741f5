//! # Dispatch Table Tests

use ls8_core::isa::dispatch::DISPATCH;
use ls8_core::isa::opcodes;

#[test]
fn every_named_opcode_has_a_handler() {
    for opcode in 0..=u8::MAX {
        assert_eq!(
            DISPATCH.contains(opcode),
            opcodes::mnemonic(opcode).is_some(),
            "{opcode:#010b}"
        );
    }
}

#[test]
fn table_holds_sixteen_instructions() {
    let count = (0..=u8::MAX).filter(|&op| DISPATCH.contains(op)).count();
    assert_eq!(count, 16);
    assert_eq!(format!("{DISPATCH:?}"), "DispatchTable { opcodes: 16 }");
}

#[test]
fn unknown_opcodes_are_absent() {
    for op in [0x00, 0xFF, 0b1010_0001, 0b0110_0101] {
        assert!(DISPATCH.lookup(op).is_none());
    }
}
