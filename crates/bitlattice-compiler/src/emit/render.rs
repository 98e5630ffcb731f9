//! Table formatter.

use std::fmt::Write as _;
use std::io;

use crate::Lattice;

use super::Config;

// Split so this source file is not itself flagged as generated.
const GENERATED_MARKER: &str = concat!("@", "generated");

/// Render `lattice` as a header.
pub fn render(lattice: &Lattice, config: &Config) -> String {
    Emitter::new(lattice, config).emit()
}

/// Render `lattice` and write the header to `out` in one piece.
pub fn write(lattice: &Lattice, config: &Config, mut out: impl io::Write) -> io::Result<()> {
    let text = render(lattice, config);
    out.write_all(text.as_bytes())?;
    out.flush()
}

struct Emitter<'a> {
    lattice: &'a Lattice,
    config: &'a Config,
    /// Widest `name,` in the table
    name_width: usize,
    /// Widest `0x...` literal in the table
    bits_width: usize,
    output: String,
}

impl<'a> Emitter<'a> {
    fn new(lattice: &'a Lattice, config: &'a Config) -> Self {
        let name_width = lattice.iter().map(|ty| ty.name.as_str().len() + 1).max().unwrap_or(0);
        let bits_width = lattice.iter().map(|ty| ty.bits.hex_digits()).max().unwrap_or(0) + 2;
        Self {
            lattice,
            config,
            name_width,
            bits_width,
            output: String::new(),
        }
    }

    fn emit(mut self) -> String {
        self.emit_header();
        self.emit_table();
        self.emit_num_bits();
        self.emit_footer();

        tracing::debug!(
            target: "lattice",
            rows = self.lattice.len(),
            bytes = self.output.len(),
            "rendered header"
        );
        self.output
    }

    fn emit_header(&mut self) {
        let c = self.config;
        if !c.copyright.is_empty() {
            let _ = write!(self.output, "// {}\n\n", c.copyright);
        }
        self.output.push_str("#pragma once\n\n");
        let _ = writeln!(
            self.output,
            "// This file is {GENERATED_MARKER} by {}.",
            c.generator
        );
        let _ = writeln!(self.output, "// Run '{}' to update it.", c.regen_command);
        let _ = write!(self.output, "\nnamespace {} {{\n\n", c.namespace);
        self.output.push_str("// clang-format off\n");
    }

    fn emit_table(&mut self) {
        self.output.push('\n');
        self.output.push_str("// For all types, call X(name, bits)\n");
        let _ = write!(self.output, "#define {}(X)", self.config.macro_name);

        for ty in self.lattice {
            let name = format!("{},", ty.name);
            let _ = write!(
                self.output,
                " \\\n  X({name:<name_width$} {bits:#0bits_width$x}UL)",
                bits = ty.bits,
                name_width = self.name_width,
                bits_width = self.bits_width,
            );
        }
        self.output.push_str("\n\n");
    }

    fn emit_num_bits(&mut self) {
        let _ = writeln!(
            self.output,
            "constexpr size_t {} = {};",
            self.config.num_bits_const,
            self.lattice.num_bits()
        );
    }

    fn emit_footer(&mut self) {
        self.output.push_str("\n// clang-format on\n\n");
        let _ = writeln!(self.output, "}} // namespace {}", self.config.namespace);
    }
}
