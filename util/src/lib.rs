use std::{error::Error, fmt};

/// Byte order used throughout the toolchain: the machine is big-endian.
pub type Endian = byteorder::BigEndian;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl Error for ParseEnumError {}

pub trait EnumFromStr: Sized {
    fn from_str(s: &str) -> Result<Self, ParseEnumError>;
}
