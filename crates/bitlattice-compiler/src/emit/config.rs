//! Configuration types for header emission.

/// Configuration for header emission.
///
/// The defaults reproduce the header the JIT build has always checked in, so
/// regenerating with them is a byte-for-byte no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Copyright line at the top of the file (without `// `); empty to omit
    pub(crate) copyright: String,
    /// Tool named in the `@generated` banner
    pub(crate) generator: String,
    /// Command named in the "run ... to update it" line
    pub(crate) regen_command: String,
    /// C++ namespace wrapping the table
    pub(crate) namespace: String,
    /// Name of the X-macro
    pub(crate) macro_name: String,
    /// Name of the `size_t` constant holding the bit count
    pub(crate) num_bits_const: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copyright: "Copyright (c) Meta Platforms, Inc. and affiliates.".to_string(),
            generator: "generate_jit_type_h.py".to_string(),
            regen_command: "make regen-jit".to_string(),
            namespace: "jit::hir".to_string(),
            macro_name: "HIR_TYPES".to_string(),
            num_bits_const: "kNumTypeBits".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copyright line.
    pub fn copyright(mut self, value: impl Into<String>) -> Self {
        self.copyright = value.into();
        self
    }

    /// Set the generator named in the banner.
    pub fn generator(mut self, value: impl Into<String>) -> Self {
        self.generator = value.into();
        self
    }

    /// Set the regeneration command named in the banner.
    pub fn regen_command(mut self, value: impl Into<String>) -> Self {
        self.regen_command = value.into();
        self
    }

    /// Set the enclosing namespace.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set the X-macro name.
    pub fn macro_name(mut self, value: impl Into<String>) -> Self {
        self.macro_name = value.into();
        self
    }

    /// Set the bit-count constant name.
    pub fn num_bits_const(mut self, value: impl Into<String>) -> Self {
        self.num_bits_const = value.into();
        self
    }
}
