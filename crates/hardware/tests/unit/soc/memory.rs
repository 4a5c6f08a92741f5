//! # Main Memory Tests

use ls8_core::common::{LoadError, MEMORY_SIZE, Trap};
use ls8_core::soc::Memory;

#[test]
fn test_new_memory_is_zeroed() {
    let mem = Memory::new();
    assert_eq!(mem.as_slice().len(), MEMORY_SIZE);
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_read_write_round_trip_at_bounds() {
    let mut mem = Memory::default();
    mem.write(0, 0x11).unwrap();
    mem.write(255, 0x22).unwrap();
    assert_eq!(mem.read(0), Ok(0x11));
    assert_eq!(mem.read(255), Ok(0x22));
}

#[test]
fn test_access_past_end_traps() {
    let mut mem = Memory::new();
    assert_eq!(mem.read(256), Err(Trap::memory(256)));
    assert_eq!(mem.write(300, 1), Err(Trap::memory(300)));
}

#[test]
fn test_load_copies_to_address_zero() {
    let mut mem = Memory::new();
    mem.load(&[1, 2, 3]).unwrap();
    assert_eq!(&mem.as_slice()[..4], &[1, 2, 3, 0]);
}

#[test]
fn test_load_full_image() {
    let image: Vec<u8> = (0..=255).collect();
    let mut mem = Memory::new();
    mem.load(&image).unwrap();
    assert_eq!(mem.read(200), Ok(200));
}

#[test]
fn test_load_rejects_empty_and_oversized() {
    let mut mem = Memory::new();
    assert!(matches!(mem.load(&[]), Err(LoadError::Empty)));
    let too_big = vec![0xAA; MEMORY_SIZE + 1];
    assert!(matches!(
        mem.load(&too_big),
        Err(LoadError::TooLarge {
            len: 257,
            capacity: 256
        })
    ));
    assert_eq!(mem.read(0), Ok(0));
}
