use std::io::{self, Write};

use super::Machine;

impl Machine {
    /// Writes the register and memory dump of the freshly loaded image to
    /// `out` and leaves the machine untouched otherwise.
    pub fn print_initial_state<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let pc = self.pc;
        self.write_state(pc);
        out.write_all(&self.output)?;
        out.write_all(b"\n")
    }

    /// Appends a dump of all registers, the low memory window, the
    /// program counter and the stack pointer to the output buffer.
    pub(crate) fn write_state(&mut self, pc: u16) {
        let rendered = self.render_state(pc);
        self.write_str(&rendered);
    }

    fn render_state(&self, pc: u16) -> String {
        let mut s = String::new();

        s.push_str("Registers   0  1  2  3  4  5  6  7  8  9\n           ");
        for cell in self.registers.cells() {
            s.push_str(&format!("{:02X} ", cell));
        }

        self.render_memory(&mut s);

        s.push_str(&format!("\nProgram Counter = {:04X}\n", pc));
        s.push_str(&format!("Stack Pointer = {:04X}\n\n", self.sp));
        s
    }

    // First 256 bytes of memory in 32-byte rows, split in the middle the
    // way the row header is.
    fn render_memory(&self, s: &mut String) {
        s.push_str(
            "\n\nMemory     00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  \
             10 11 12 13 14 15 16 17 18 19 1A 1B 1C 1D 1E 1F\n\n",
        );

        let data = self.memory.data();
        for row in (0..256).step_by(32) {
            s.push_str(&format!("{:04X}       ", row));
            for cell in &data[row..row + 16] {
                s.push_str(&format!("{:02X} ", cell));
            }
            s.push(' ');
            for cell in &data[row + 16..row + 32] {
                s.push_str(&format!("{:02X} ", cell));
            }
            s.push('\n');
        }
    }
}
