use super::*;

#[test]
fn stops_the_machine() {
    let (_, out) = run_expect(&[op!(HALT)], ExitReason::Halted);

    assert!(out.is_empty());
}

#[test]
fn code_after_halt_is_never_executed() {
    let (machine, _) = run_program(&[
        op!(HALT),
        op!(LOADI), 1, 0x00, 0xAA,
    ]);

    assert_eq!(machine.register(Register::R1), 0);
}
