//! Argument builders for the CLI.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Header to (re)generate (positional).
pub fn output_path_arg() -> Arg {
    Arg::new("output")
        .value_name("OUTPUT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Filename to write to")
}
