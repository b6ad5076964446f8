//! Container format for compiled ASML programs: the four ASCII bytes
//! `ASML` followed by the raw memory image, which may be truncated short
//! of the full 65,536 bytes. Unwritten memory is zero either way.

use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Magic identifying a compiled image.
pub const MAGIC: [u8; 4] = *b"ASML";

#[derive(Debug, PartialEq)]
pub struct Image {
    memory: Vec<u8>,
}

impl Image {
    pub fn from(memory: Vec<u8>) -> Image {
        Image { memory }
    }

    pub fn copy_from(memory: &[u8]) -> Image {
        Image {
            memory: Vec::from(memory),
        }
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory[..]
    }

    pub fn into_memory(self) -> Vec<u8> {
        self.memory
    }
}

/// Checks whether `bytes` starts with the compiled-image magic.
pub fn holds_image(bytes: &[u8]) -> bool {
    bytes.len() >= MAGIC.len() && bytes[..MAGIC.len()] == MAGIC
}

pub fn read<R: Read>(reader: &mut R) -> io::Result<Image> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;

    if magic != MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "not a compiled ASML image",
        ));
    }

    let mut memory = Vec::new();
    reader.read_to_end(&mut memory)?;

    Ok(Image::from(memory))
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> io::Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&image.memory[..])?;
    Ok(())
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> io::Result<Image> {
        read(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, image: &Image) -> io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Image> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> io::Result<()> {
    BufWriter::new(File::create(path)?).write_image(image)
}
