use std::fmt;

use util::EnumFromStr;
use util_derive::EnumFromStr;

/// Mnemonic keywords, directives included. Identifiers are matched
/// against this table by exact name; anything else stays an identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Mnemonic {
    NOOP,
    LOADA,
    LOADI,
    LOADR,
    STRA,
    STRR,
    MOVR,
    XFER,
    ADD,
    ADDI,
    OR,
    AND,
    XOR,
    ROT,
    JMP,
    JMPA,
    CALLA,
    CALLR,
    RTN,
    LDSPI,
    LDSPA,
    LDSPR,
    PUSH,
    POP,
    HALT,

    ORG,
    RMB,
    FCB,
    FDB,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Illegal,
    Eof,
    Comment,
    EndInst,

    Ident,
    Label,
    Number,
    Str,
    Register,

    Comma,
    Immediate,

    Keyword(Mnemonic),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Illegal => f.write_str("ILLEGAL"),
            Kind::Eof => f.write_str("EOF"),
            Kind::Comment => f.write_str("COMMENT"),
            Kind::EndInst => f.write_str("END_INST"),
            Kind::Ident => f.write_str("IDENT"),
            Kind::Label => f.write_str("LABEL"),
            Kind::Number => f.write_str("NUMBER"),
            Kind::Str => f.write_str("STRING"),
            Kind::Register => f.write_str("REGISTER"),
            Kind::Comma => f.write_str("COMMA"),
            Kind::Immediate => f.write_str("IMMEDIATE"),
            Kind::Keyword(mnemonic) => write!(f, "{:?}", mnemonic),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: Kind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Creates a token with the kind `kind` and literal representation
    /// `literal`.
    pub fn new(kind: Kind, literal: String, line: usize, column: usize) -> Token {
        Token {
            kind,
            literal,
            line,
            column,
        }
    }

    /// Creates a token with no literal representation beyond its kind.
    pub fn simple(kind: Kind, line: usize, column: usize) -> Token {
        Token::new(kind, String::new(), line, column)
    }
}

/// Checks the keyword table: a known mnemonic becomes a keyword token
/// kind, anything else is an identifier.
pub fn lookup_ident(ident: &str) -> Kind {
    match Mnemonic::from_str(ident) {
        Ok(mnemonic) => Kind::Keyword(mnemonic),
        Err(_) => Kind::Ident,
    }
}
