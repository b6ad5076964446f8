use byteorder::ByteOrder;
use util::Endian;

use asml::constants::MEMORY_SIZE;

use crate::error::Error;
use crate::program::{BitPart, Program, Segment};
use crate::Result;

/// Resolves every link site against the label table and patches the
/// reserved bytes in place, then lays the segments over a flat
/// 65,536-byte image at their declared origins. Purely mechanical: no
/// relaxation, no relocation.
pub fn link(mut program: Program) -> Result<Vec<u8>> {
    let Program { segments, labels } = &mut program;

    for segment in segments.iter_mut() {
        let Segment { start, code, links } = segment;

        for (&address, site) in links.iter() {
            let target = labels
                .get(&site.label)
                .copied()
                .ok_or_else(|| Error::Link {
                    label: site.label.clone(),
                })?;
            let value = target.wrapping_add(site.offset as u16);
            let at = (address - *start) as usize;

            match site.part {
                BitPart::Full => Endian::write_u16(&mut code[at..at + 2], value),
                BitPart::High => code[at] = (value >> 8) as u8,
                BitPart::Low => code[at] = value as u8,
            }
        }
    }

    let mut image = vec![0u8; MEMORY_SIZE];
    for segment in &program.segments {
        let start = segment.start as usize;
        image[start..start + segment.code.len()].copy_from_slice(&segment.code);
    }

    Ok(image)
}
