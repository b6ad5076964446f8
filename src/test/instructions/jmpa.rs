use super::*;

#[test]
fn jumps_unconditionally() {
    let (machine, _) = run_program(&[
        op!(JMPA), 0x00, 0x07,
        op!(LOADI), 2, 0x00, 0xAA,
        op!(HALT),
    ]);

    assert_eq!(machine.register(Register::R2), 0);
}
