//! Command builder for the CLI.

use clap::Command;

use super::args::output_path_arg;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("bitlattice")
        .about("Generate the HIR type-tag header")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(output_path_arg())
        .after_help(
            r#"EXAMPLES:
  bitlattice Jit/hir/type_generated.h

ENVIRONMENT:
  BITLATTICE_LOG_LEVEL   error, warn (default), info, debug, trace
  BITLATTICE_LOG_FORMAT  text (default) or json
  RUST_LOG               overrides the log filter"#,
        )
}
