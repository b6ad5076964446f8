use super::*;

#[test]
fn xors_register_values() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0b1010,
        op!(LOADI), 2, 0x00, 0b0110,
        op!(XOR), 3, 1, 2,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R3), 0b1100);
}

#[test]
fn clears_a_register_xored_with_itself() {
    let (machine, _) = run_program(&[
        op!(LOADI), 0xA, 0xAB, 0xCD,
        op!(XOR), 0xA, 0xA, 0xA,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::A), 0);
}
