use byteorder::ByteOrder;
use num_derive::{FromPrimitive, ToPrimitive};
use util::Endian;

use crate::constants;

/// Register names as they appear in operand bytes.
///
/// `R0` through `R9` are 8-bit registers backed by one cell each. `A`
/// through `D` are 16-bit big-endian views over the cell pairs 2-3, 4-5,
/// 6-7 and 8-9; writing a pair view is visible through the underlying
/// 8-bit registers and vice versa.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    A,
    B,
    C,
    D,
}

impl Register {
    /// Width of the register in bytes.
    pub fn width(self) -> u16 {
        match self {
            Register::A | Register::B | Register::C | Register::D => 2,
            _ => 1,
        }
    }

    // Descriptor table: first storage cell of each register. Together
    // with `width` this fully determines the storage range.
    fn cell(self) -> usize {
        match self {
            Register::A => 2,
            Register::B => 4,
            Register::C => 6,
            Register::D => 8,
            _ => self as usize,
        }
    }
}

/// The physical register file.
#[derive(Default, Debug)]
pub struct RegisterFile {
    cells: [u8; constants::REGISTER_COUNT],
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        Default::default()
    }

    /// Reads any register as a 16-bit value; 8-bit registers are
    /// zero-extended.
    pub fn read_any(&self, r: Register) -> u16 {
        let cell = r.cell();
        match r.width() {
            1 => u16::from(self.cells[cell]),
            _ => Endian::read_u16(&self.cells[cell..cell + 2]),
        }
    }

    /// Reads any register as a 16-bit two's-complement value; 8-bit
    /// registers are sign-extended.
    pub fn read_signed(&self, r: Register) -> i16 {
        match r.width() {
            1 => i16::from(self.cells[r.cell()] as i8),
            _ => self.read_any(r) as i16,
        }
    }

    /// Writes a 16-bit value to any register, truncating to the register
    /// width.
    pub fn write_any(&mut self, r: Register, value: u16) {
        let cell = r.cell();
        match r.width() {
            1 => self.cells[cell] = value as u8,
            _ => Endian::write_u16(&mut self.cells[cell..cell + 2], value),
        }
    }

    /// The raw storage cells, in index order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
