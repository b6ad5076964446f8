use super::*;

#[test]
fn width_follows_the_destination() {
    let (machine, _) = run_program(&[
        op!(LOADI), 0xB, 0x00, 0x09,
        op!(LOADR), 0xA, 0xB,
        op!(HALT),
        0, 0xAB, 0xCD,
    ]);

    assert_eq!(machine.register(Register::A), 0xABCD);
}

#[test]
fn address_register_may_be_narrow() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0x08,
        op!(LOADR), 2, 1,
        op!(HALT),
        0x5A,
    ]);

    assert_eq!(machine.register(Register::R2), 0x5A);
}
