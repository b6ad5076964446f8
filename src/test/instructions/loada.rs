use super::*;

#[test]
fn loads_one_byte_for_single_register() {
    let (machine, _) = run_program(&[
        op!(LOADA), 1, 0x00, 0x05,
        op!(HALT),
        0xAB, 0xCD,
    ]);

    assert_eq!(machine.register(Register::R1), 0xAB);
}

#[test]
fn loads_two_bytes_for_double_register() {
    let (machine, _) = run_program(&[
        op!(LOADA), 0xA, 0x00, 0x05,
        op!(HALT),
        0xAB, 0xCD,
    ]);

    assert_eq!(machine.register(Register::A), 0xABCD);
}
