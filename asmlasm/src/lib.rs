//! Assembler for the [`asml`](../asml/index.html) virtual machine.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which takes raw
//! source bytes and returns the linked 65,536-byte memory image ready for
//! [`asml::Machine::new`](../asml/struct.Machine.html#method.new). The
//! pieces are also usable on their own: [`Lexer`](struct.Lexer.html)
//! produces tokens, [`Parser`](struct.Parser.html) turns them into a
//! [`Program`](struct.Program.html) of origin-anchored segments with
//! unresolved label references, and [`link`](fn.link.html) patches those
//! references and lays the segments over a flat image.
//!
//! # The ASML Language
//!
//! One instruction per line. `;` starts a comment running to the end of
//! the line. Commas between instruction operands are optional; data
//! directives require them.
//!
//! ## Registers
//!
//! Registers are written `%h` with a single hex digit. `%0`-`%9` are the
//! ten 8-bit registers; `%A`-`%D` are 16-bit big-endian views over the
//! register pairs 2-3, 4-5, 6-7 and 8-9. The width of a register operand
//! decides how many memory bytes loads, stores, pushes and pops touch.
//! `%SP` names the stack pointer for the lexer's benefit but is not a
//! general register; the stack pointer is set through the `LDSP` family.
//!
//! ## Numbers, labels and the current location
//!
//! Number literals are decimal (`42`, `-1`), hexadecimal (`0x2A`) or
//! binary (`!101010`). `:name` defines a label at the current location;
//! `name` as an operand refers to it and may carry an offset, as in
//! `main+4`. `$` is the current location counter. A label reference in a
//! 16-bit operand assembles as two placeholder bytes patched at link
//! time. Prefixing a reference with `^` or `` ` `` selects only the high
//! or low byte of the resolved address, which also makes the reference
//! legal in one-byte operands. `#` may prefix any immediate value.
//!
//! ## Directives
//!
//!  Keyword | Description                             | Syntax
//! ---------|-----------------------------------------|---------------------
//! `ORG`    | start a new segment at an absolute origin | `ORG 0x0100`
//! `RMB`    | reserve zeroed bytes                    | `RMB 16`
//! `FCB`    | emit constant bytes and strings         | `FCB 1, 0x02, "text"`
//! `FDB`    | emit 16-bit big-endian constants        | `FDB 0x1234, main+2`
//!
//! ## Instructions
//!
//!  Mnemonic | Short Description                          | Syntax
//! ----------|--------------------------------------------|----------------------
//! `NOOP`    | No-op                                      | `NOOP`
//! `LOADA`   | Load register from address                 | `LOADA %r, addr`
//! `LOADI`   | Load immediate value                       | `LOADI %r, value`
//! `LOADR`   | Load register from address in register     | `LOADR %d, %s`
//! `STRA`    | Store register at address                  | `STRA %r, addr`
//! `STRR`    | Store register at address in register      | `STRR %s, %d`
//! `MOVR`    | Copy register (alias `XFER`)               | `MOVR %d, %s`
//! `ADD`     | Two's-complement addition                  | `ADD %d, %s, %t`
//! `ADDI`    | Add signed one-byte immediate              | `ADDI %d, %s, value`
//! `OR`      | Bitwise or                                 | `OR %d, %s, %t`
//! `AND`     | Bitwise and                                | `AND %d, %s, %t`
//! `XOR`     | Bitwise exclusive-or                       | `XOR %d, %s, %t`
//! `ROT`     | Rotate left by count                       | `ROT %r, #count`
//! `JMP`     | Jump if register equals register 0         | `JMP %r, addr`
//! `JMPA`    | Jump unconditionally                       | `JMPA addr`
//! `CALLA`   | Push return address and jump               | `CALLA addr`
//! `CALLR`   | Push return address and jump to register   | `CALLR %r`
//! `RTN`     | Pop return address                         | `RTN`
//! `LDSPI`   | Load stack pointer immediate               | `LDSPI value`
//! `LDSPA`   | Load stack pointer from address            | `LDSPA addr`
//! `LDSPR`   | Load stack pointer from register           | `LDSPR %r`
//! `PUSH`    | Push register                              | `PUSH %r`
//! `POP`     | Pop register                               | `POP %r`
//! `HALT`    | Stop the machine                           | `HALT`
//!
//! A line starting with an unknown identifier is taken as raw data: every
//! whitespace-separated token on it is assembled as one hex byte.
//!
//! Execution starts at the address stored in the reset vector, so a
//! complete program places its entry point there:
//!
//! ```text
//! :main
//! LOADI %1 "H"
//! STRA %1 0xFFFD
//! HALT
//!
//! ORG 0xFFFE
//! FDB main
//! ```

mod error;
mod lexer;
mod linker;
mod parser;
mod program;
mod token;

pub use crate::error::Error;
pub use crate::lexer::Lexer;
pub use crate::linker::link;
pub use crate::parser::Parser;
pub use crate::program::{BitPart, LabelRef, Program, Segment};
pub use crate::token::{Kind, Mnemonic, Token};

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles and links `source` into a flat memory image.
pub fn assemble(source: &[u8]) -> Result<Vec<u8>> {
    let program = Parser::new(Lexer::new(source)).parse()?;
    link(program)
}
