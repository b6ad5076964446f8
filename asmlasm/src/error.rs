use std::error::Error as StdError;
use std::fmt;

/// First failure encountered while assembling. The kinds stay distinct:
/// lexing, parsing, segment layout and linking fail for different reasons
/// and are reported with the detail each phase has available.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The lexer hit a byte it cannot start a token with.
    Lex { line: usize, column: usize },
    /// The parser rejected the token stream.
    Parse { message: String, line: usize },
    /// Two segments claim the same bytes.
    Overlap { first: u16, second: u16 },
    /// A segment runs past the end of the address space.
    OutOfRange { origin: u16 },
    /// A link site names a label that was never defined.
    Link { label: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lex { line, column } => {
                write!(f, "illegal character on line {}, column {}", line, column)
            }
            Error::Parse { message, line } => write!(f, "{} on line {}", message, line),
            Error::Overlap { first, second } => write!(
                f,
                "overlapping address regions 0x{:04X} and 0x{:04X}",
                first, second
            ),
            Error::OutOfRange { origin } => write!(
                f,
                "code at origin 0x{:04X} runs past the end of memory",
                origin
            ),
            Error::Link { label } => write!(f, "label {} not defined", label),
        }
    }
}

impl StdError for Error {}
