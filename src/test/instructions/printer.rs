use super::*;

use crate::constants;

#[test]
fn byte_in_printer_cell_is_emitted_and_cleared() {
    let (machine, out) = run_program(&[
        op!(LOADI), 1, 0x00, 0x48,
        op!(STRA), 1, 0xFF, 0xFD,
        op!(HALT),
    ]);

    assert_eq!(out, b"H");
    assert_eq!(machine.memory().read(constants::PRINTER_CELL, 1), 0);
}

#[test]
fn each_instruction_boundary_emits_at_most_one_byte() {
    // A 16-bit store covering 0xFFFC-0xFFFD leaves only one byte in the
    // printer cell at poll time.
    let (_, out) = run_program(&[
        op!(LOADI), 0xA, 0x12, 0x42,
        op!(STRA), 0xA, 0xFF, 0xFC,
        op!(HALT),
    ]);

    assert_eq!(out, b"B");
}

#[test]
fn every_instruction_is_followed_by_a_poll() {
    let (_, out) = run_program(&[
        op!(LOADI), 1, 0x00, 0x41,
        op!(STRA), 1, 0xFF, 0xFD,
        op!(LOADI), 1, 0x00, 0x42,
        op!(STRA), 1, 0xFF, 0xFD,
        op!(HALT),
    ]);

    assert_eq!(out, b"AB");
}
