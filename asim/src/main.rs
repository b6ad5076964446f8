#[macro_use]
extern crate clap;

use std::path::PathBuf;
use std::process;

use clap::Arg;

use asim::{Options, Output};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nASML assembler and virtual machine",
    "\nArchitecture: 8-bit registers, 16-bit addresses"
);

fn main() {
    pretty_env_logger::init();

    let matches = app_from_crate!()
        .long_version(LONG_VERSION)
        .arg(
            Arg::with_name("INPUT")
                .help("Source file or compiled image to load")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .takes_value(true)
                .value_name("PATH")
                .default_value("stdout")
                .help("Where to write runtime output or the compiled image"),
        )
        .arg(
            Arg::with_name("state")
                .long("state")
                .help("Write a register and memory dump before every instruction"),
        )
        .arg(
            Arg::with_name("printmem")
                .long("printmem")
                .help("Print the loaded image's initial state and exit"),
        )
        .arg(
            Arg::with_name("compile")
                .long("compile")
                .help("Assemble and link, then write the image instead of executing"),
        )
        .get_matches();

    let output = match matches.value_of("out").unwrap() {
        "stdout" => Output::Stdout,
        path => Output::File(PathBuf::from(path)),
    };

    let options = Options {
        input: PathBuf::from(matches.value_of("INPUT").unwrap()),
        output,
        trace_state: matches.is_present("state"),
        print_memory: matches.is_present("printmem"),
        compile: matches.is_present("compile"),
    };

    if let Err(err) = asim::run(&options) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
