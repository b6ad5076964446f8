use super::*;

#[test]
fn adds_single_registers() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 3,
        op!(LOADI), 2, 0x00, 4,
        op!(ADD), 0, 1, 2,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R0), 7);
}

#[test]
fn single_register_operands_are_sign_extended() {
    // 0xFF is -1 in a byte-wide register.
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0xFF,
        op!(LOADI), 0xA, 0x01, 0x00,
        op!(ADD), 0xA, 0xA, 1,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::A), 0x00FF);
}

#[test]
fn wraps_on_overflow() {
    let (machine, _) = run_program(&[
        op!(LOADI), 0xA, 0x7F, 0xFF,
        op!(LOADI), 1, 0x00, 1,
        op!(ADD), 0xA, 0xA, 1,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::A), 0x8000);
}
