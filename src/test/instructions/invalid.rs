use super::*;

#[test]
fn unknown_opcode_terminates_without_error() {
    let (_, out) = run_expect(&[0xEE], ExitReason::InvalidOpcode);

    assert_eq!(out, b"INVALID OPCODE\n");
}

#[test]
fn unknown_register_operand_terminates_like_an_invalid_opcode() {
    let (_, out) = run_expect(&[op!(PUSH), 0x45], ExitReason::InvalidOpcode);

    assert_eq!(out, b"INVALID OPCODE\n");
}

#[test]
fn printer_buffer_is_flushed_before_termination() {
    let (_, out) = run_expect(
        &[
            op!(LOADI), 1, 0x00, 0x48,
            op!(STRA), 1, 0xFF, 0xFD,
            0xEE,
        ],
        ExitReason::InvalidOpcode,
    );

    assert_eq!(out, b"INVALID OPCODE\nH");
}
