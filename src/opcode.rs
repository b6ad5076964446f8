use num_derive::{FromPrimitive, ToPrimitive};

/// Machine instruction set.
///
/// Every instruction starts with one opcode byte, followed by the operand
/// bytes its form dictates. Register operands are one byte each; immediate
/// values and addresses are two bytes big-endian unless the form calls for
/// a single byte.
///
/// | Form            | Bytes after opcode          | Opcodes                    |
/// |-----------------|-----------------------------|----------------------------|
/// | no args         | --                          | NOOP, RTN, HALT            |
/// | reg             | reg                         | CALLR, LDSPR, PUSH, POP    |
/// | reg, reg        | reg, reg                    | LOADR, STRR, MOVR          |
/// | reg, reg, reg   | reg, reg, reg               | ADD, OR, AND, XOR          |
/// | reg, val16      | reg, hi, lo                 | LOADA, LOADI, STRA, JMP    |
/// | reg, reg, val8  | reg, reg, byte              | ADDI                       |
/// | reg, val8       | reg, byte                   | ROT                        |
/// | val16           | hi, lo                      | JMPA, CALLA, LDSPI, LDSPA  |
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    /// Does nothing.
    NOOP,
    /// Loads `width(r)` bytes from the given address into `r`.
    LOADA,
    /// Loads the immediate value into `r`, truncated to the register
    /// width.
    LOADI,
    /// Loads into the first register from the address held by the second.
    LOADR,
    /// Stores `width(r)` bytes of `r` at the given address.
    STRA,
    /// Stores the first register at the address held by the second.
    STRR,
    /// Copies the second register into the first, truncating or
    /// zero-extending as the widths dictate.
    MOVR,
    /// Two's-complement addition of the second and third registers into
    /// the first; 8-bit operands are sign-extended before adding.
    ADD,
    /// Adds a sign-extended one-byte immediate to the second register and
    /// writes the sum into the first.
    ADDI,
    /// Bitwise or of the second and third registers into the first.
    OR,
    /// Bitwise and of the second and third registers into the first.
    AND,
    /// Bitwise exclusive-or of the second and third registers into the
    /// first.
    XOR,
    /// Rotates the register left by the count modulo its bit width.
    ROT,
    /// Jumps to the address if the register equals register 0.
    JMP,
    /// Jumps to the address unconditionally.
    JMPA,
    /// Pushes the program counter and jumps to the address.
    CALLA,
    /// Pushes the program counter and jumps to the address held by the
    /// register.
    CALLR,
    /// Pops the program counter.
    RTN,
    /// Loads the immediate value into the stack pointer.
    LDSPI,
    /// Loads the stack pointer from the 16-bit value at the address.
    LDSPA,
    /// Loads the stack pointer from the register.
    LDSPR,
    /// Decrements the stack pointer by the register width and stores the
    /// register at the new stack pointer.
    PUSH,
    /// Loads the register from the stack pointer and increments the stack
    /// pointer by the register width.
    POP,
    /// Stops execution.
    HALT,
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_enum_display!(Opcode);
