//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub output: PathBuf,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| unreachable!("clap should have caught this")),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self { output: p.output }
    }
}
