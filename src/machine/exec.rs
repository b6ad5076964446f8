use num::FromPrimitive;

use super::{Machine, Step};
use crate::opcode::Opcode;
use crate::register::Register;

// Fetches a register operand byte; bytes that name no register end the
// run like an invalid opcode.
macro_rules! fetch_reg {
    ($vm:expr) => {
        match Register::from_u8($vm.fetch_byte()) {
            Some(r) => r,
            None => return Step::Invalid,
        }
    };
}

impl Machine {
    pub(crate) fn execute(&mut self, op: Opcode) -> Step {
        match op {
            Opcode::NOOP => {}

            Opcode::LOADA => {
                let r = fetch_reg!(self);
                let address = self.fetch_u16();
                self.load_absolute(r, address);
            }
            Opcode::LOADI => {
                let r = fetch_reg!(self);
                let value = self.fetch_u16();
                self.registers.write_any(r, value);
            }
            Opcode::LOADR => {
                let dest = fetch_reg!(self);
                let src = fetch_reg!(self);
                let address = self.registers.read_any(src);
                self.load_absolute(dest, address);
            }

            Opcode::STRA => {
                let r = fetch_reg!(self);
                let address = self.fetch_u16();
                self.store_absolute(r, address);
            }
            Opcode::STRR => {
                let src = fetch_reg!(self);
                let dest = fetch_reg!(self);
                let address = self.registers.read_any(dest);
                self.store_absolute(src, address);
            }

            Opcode::MOVR => {
                let dest = fetch_reg!(self);
                let src = fetch_reg!(self);
                let value = self.registers.read_any(src);
                self.registers.write_any(dest, value);
            }

            Opcode::ADD => {
                let dest = fetch_reg!(self);
                let lhs = fetch_reg!(self);
                let rhs = fetch_reg!(self);
                let sum = self
                    .registers
                    .read_signed(lhs)
                    .wrapping_add(self.registers.read_signed(rhs));
                self.registers.write_any(dest, sum as u16);
            }
            Opcode::ADDI => {
                let dest = fetch_reg!(self);
                let src = fetch_reg!(self);
                let imm = self.fetch_byte() as i8;
                let sum = self.registers.read_signed(src).wrapping_add(i16::from(imm));
                self.registers.write_any(dest, sum as u16);
            }

            Opcode::OR => {
                let dest = fetch_reg!(self);
                let lhs = fetch_reg!(self);
                let rhs = fetch_reg!(self);
                let value = self.registers.read_any(lhs) | self.registers.read_any(rhs);
                self.registers.write_any(dest, value);
            }
            Opcode::AND => {
                let dest = fetch_reg!(self);
                let lhs = fetch_reg!(self);
                let rhs = fetch_reg!(self);
                let value = self.registers.read_any(lhs) & self.registers.read_any(rhs);
                self.registers.write_any(dest, value);
            }
            Opcode::XOR => {
                let dest = fetch_reg!(self);
                let lhs = fetch_reg!(self);
                let rhs = fetch_reg!(self);
                let value = self.registers.read_any(lhs) ^ self.registers.read_any(rhs);
                self.registers.write_any(dest, value);
            }

            Opcode::ROT => {
                let r = fetch_reg!(self);
                let count = self.fetch_byte();
                self.rotate(r, count);
            }

            Opcode::JMP => {
                let r = fetch_reg!(self);
                let address = self.fetch_u16();
                if self.registers.read_any(r) == self.registers.read_any(Register::R0) {
                    self.pc = address;
                }
            }
            Opcode::JMPA => {
                self.pc = self.fetch_u16();
            }

            Opcode::CALLA => {
                let address = self.fetch_u16();
                let ret = self.pc;
                self.push16(ret);
                self.pc = address;
            }
            Opcode::CALLR => {
                let r = fetch_reg!(self);
                let address = self.registers.read_any(r);
                let ret = self.pc;
                self.push16(ret);
                self.pc = address;
            }
            Opcode::RTN => {
                self.pc = self.pop16();
            }

            Opcode::LDSPI => {
                self.sp = self.fetch_u16();
            }
            Opcode::LDSPA => {
                let address = self.fetch_u16();
                self.sp = self.memory.read(address, 2);
            }
            Opcode::LDSPR => {
                let r = fetch_reg!(self);
                self.sp = self.registers.read_any(r);
            }

            Opcode::PUSH => {
                let r = fetch_reg!(self);
                self.sp = self.sp.wrapping_sub(r.width());
                let value = self.registers.read_any(r);
                self.memory.write(self.sp, r.width(), value);
            }
            Opcode::POP => {
                let r = fetch_reg!(self);
                let value = self.memory.read(self.sp, r.width());
                self.registers.write_any(r, value);
                self.sp = self.sp.wrapping_add(r.width());
            }

            Opcode::HALT => return Step::Halt,
        }

        Step::Continue
    }

    fn load_absolute(&mut self, r: Register, address: u16) {
        let value = self.memory.read(address, r.width());
        self.registers.write_any(r, value);
    }

    fn store_absolute(&mut self, r: Register, address: u16) {
        let value = self.registers.read_any(r);
        self.memory.write(address, r.width(), value);
    }

    // Rotation is always to the left; the count wraps at the register's
    // bit width.
    fn rotate(&mut self, r: Register, count: u8) {
        let value = self.registers.read_any(r);
        let rotated = match r.width() {
            1 => u16::from((value as u8).rotate_left(u32::from(count))),
            _ => value.rotate_left(u32::from(count)),
        };
        self.registers.write_any(r, rotated);
    }

    fn push16(&mut self, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        self.memory.write(self.sp, 2, value);
    }

    fn pop16(&mut self) -> u16 {
        let value = self.memory.read(self.sp, 2);
        self.sp = self.sp.wrapping_add(2);
        value
    }
}
