use super::*;

#[test]
fn calls_through_a_register() {
    let (machine, _) = run_program(&[
        op!(LDSPI), 0xFF, 0x00,
        op!(LOADI), 0xA, 0x00, 0x0A,
        op!(CALLR), 0xA,
        op!(HALT),
        op!(LOADI), 1, 0x00, 9,
        op!(RTN),
    ]);

    assert_eq!(machine.register(Register::R1), 9);
    assert_eq!(machine.stack_pointer(), 0xFF00);
}
