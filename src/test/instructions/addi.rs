use super::*;

#[test]
fn adds_positive_immediate() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 40,
        op!(ADDI), 1, 1, 2,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 42);
}

#[test]
fn immediate_is_sign_extended() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 5,
        op!(ADDI), 1, 1, 0xFF,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 4);
}

#[test]
fn decrement_through_zero_wraps_in_register_width() {
    let (machine, _) = run_program(&[
        op!(ADDI), 1, 1, 0xFF,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 0xFF);
}

#[test]
fn double_register_uses_full_width() {
    let (machine, _) = run_program(&[
        op!(LOADI), 0xA, 0x01, 0x00,
        op!(ADDI), 0xA, 0xA, 0xFF,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::A), 0x00FF);
}
