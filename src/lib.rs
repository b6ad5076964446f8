//! Virtual machine for the ASML educational assembly language.
//!
//! The machine is byte addressable with 65,536 cells of memory, ten 8-bit
//! register cells (four of which pair up into big-endian 16-bit views), a
//! 16-bit program counter and stack pointer, and a memory-mapped printer
//! cell that is polled after every instruction. Programs are flat memory
//! images; execution starts at the address stored in the reset vector.
//!
//! The [`asmlasm`](../asmlasm/index.html) crate assembles source text into
//! such images, and [`asim`](../asim/index.html) fronts both crates on the
//! command line.

pub mod constants;

mod machine;
mod memory;
mod opcode;
mod register;

pub use crate::machine::{ExitReason, LoadError, Machine};
pub use crate::memory::Memory;
pub use crate::opcode::Opcode;
pub use crate::register::{Register, RegisterFile};
