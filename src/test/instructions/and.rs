use super::*;

#[test]
fn ands_register_values() {
    let (machine, _) = run_program(&[
        op!(LOADI), 1, 0x00, 0b1010,
        op!(LOADI), 2, 0x00, 0b0110,
        op!(AND), 3, 1, 2,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R3), 0b0010);
}
