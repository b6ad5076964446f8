//! Front-end glue for the ASML toolchain: reads a source file or a
//! compiled image, then compiles, dumps or executes it according to the
//! command-line options.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use asml::{ExitReason, LoadError, Machine};

#[derive(Debug)]
pub enum IoContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error, IoContext, PathBuf),
    Asm(asmlasm::Error),
    Load(LoadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IoContext::ReadInput => "Reading input",
                    IoContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => write!(f, "{}", err),
            Error::Load(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

/// Where runtime output or the compiled image goes.
pub enum Output {
    Stdout,
    File(PathBuf),
}

pub struct Options {
    pub input: PathBuf,
    pub output: Output,
    pub trace_state: bool,
    pub print_memory: bool,
    pub compile: bool,
}

pub fn run(options: &Options) -> Result<(), Error> {
    let image = load_image(&options.input)?;

    if options.compile {
        return write_compiled(&options.output, &image);
    }

    let mut machine = Machine::new(&image, options.trace_state).map_err(Error::Load)?;

    if options.print_memory {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        return machine
            .print_initial_state(&mut lock)
            .map_err(write_error("stdout"));
    }

    let reason = match &options.output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            machine.run(&mut lock).map_err(write_error("stdout"))?
        }
        Output::File(path) => {
            let file = fs::File::create(path)
                .map_err(|err| Error::Io(err, IoContext::WriteOutput, path.clone()))?;
            let mut writer = io::BufWriter::new(file);
            machine
                .run(&mut writer)
                .and_then(|reason| writer.flush().map(|_| reason))
                .map_err(|err| Error::Io(err, IoContext::WriteOutput, path.clone()))?
        }
    };

    debug!(
        "machine stopped: {}",
        match reason {
            ExitReason::Halted => "halted",
            ExitReason::InvalidOpcode => "invalid opcode",
        }
    );
    Ok(())
}

/// Reads the input file and produces a memory image: compiled images are
/// loaded directly, anything else goes through the assembler.
fn load_image(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes =
        fs::read(path).map_err(|err| Error::Io(err, IoContext::ReadInput, path.to_owned()))?;

    if asmlfile::holds_image(&bytes) {
        debug!("input carries the image magic, skipping assembly");
        let image = asmlfile::read(&mut &bytes[..])
            .map_err(|err| Error::Io(err, IoContext::ReadInput, path.to_owned()))?;
        Ok(image.into_memory())
    } else {
        debug!("assembling {} bytes of source", bytes.len());
        let image = asmlasm::assemble(&bytes).map_err(Error::Asm)?;
        Ok(image)
    }
}

// The sink is only created once assembly has succeeded, so a failed
// build never leaves a partial image behind.
fn write_compiled(output: &Output, image: &[u8]) -> Result<(), Error> {
    let image = asmlfile::Image::copy_from(image);

    match output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            asmlfile::write(&mut lock, &image).map_err(write_error("stdout"))
        }
        Output::File(path) => {
            asmlfile::write_file(path, &image)
                .map_err(|err| Error::Io(err, IoContext::WriteOutput, path.clone()))
        }
    }
}

fn write_error(sink: &str) -> impl Fn(io::Error) -> Error + '_ {
    move |err| Error::Io(err, IoContext::WriteOutput, PathBuf::from(sink))
}
