/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 65536;

/// Number of physical 8-bit register cells.
pub const REGISTER_COUNT: usize = 10;

/// Memory-mapped printer cell, polled after every instruction.
pub const PRINTER_CELL: u16 = 0xFFFD;

/// Address of the big-endian reset vector holding the initial program
/// counter.
pub const RESET_VECTOR: u16 = 0xFFFE;
