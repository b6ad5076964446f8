use super::*;

#[test]
fn rotates_left_through_the_high_bit() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0x81,
        op!(ROT), 1, 1,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 0x03);
}

#[test]
fn full_width_rotation_is_the_identity() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0x5C,
        op!(ROT), 1, 8,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 0x5C);
}

#[test]
fn complementary_rotations_are_the_identity() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0x5C,
        op!(ROT), 1, 1,
        op!(ROT), 1, 7,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R1), 0x5C);
}

#[test]
fn double_register_rotates_over_sixteen_bits() {
    let (machine, _) = run_program(&[
        op!(LOADI), 0xA, 0x80, 0x01,
        op!(ROT), 0xA, 1,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::A), 0x0003);
}
