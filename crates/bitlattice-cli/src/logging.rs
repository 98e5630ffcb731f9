//! Diagnostic logging for the generator.
//!
//! Logs go to stderr. `BITLATTICE_LOG_LEVEL` takes any `tracing` level name
//! (default `warn`), `BITLATTICE_LOG_FORMAT` is `text` or `json`. `RUST_LOG`,
//! when set, replaces the filter.

use std::env;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

const LEVEL_ENV: &str = "BITLATTICE_LOG_LEVEL";
const FORMAT_ENV: &str = "BITLATTICE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LevelFilter,
}

impl Default for LogOptions {
    /// Quiet: the generator runs inside other builds.
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: LevelFilter::WARN,
        }
    }
}

impl LogOptions {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(FORMAT_ENV).ok().as_deref(),
            env::var(LEVEL_ENV).ok().as_deref(),
        )
    }

    /// Unparseable values fall back to the defaults.
    fn from_vars(format: Option<&str>, level: Option<&str>) -> Self {
        let default = Self::default();
        Self {
            format: format.and_then(|s| s.trim().parse().ok()).unwrap_or(default.format),
            level: level.and_then(|s| s.trim().parse().ok()).unwrap_or(default.level),
        }
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(options: LogOptions) {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, fmt};

    let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let filter = EnvFilter::builder()
        .with_default_directive(options.level.into())
        .from_env_lossy();
    let builder = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(true);

    // Fails only if a subscriber is already installed.
    let _ = match options.format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Text => tracing::subscriber::set_global_default(builder.compact().finish()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quiet_text() {
        assert_eq!(LogOptions::from_vars(None, None), LogOptions::default());
        assert_eq!(LogOptions::default().level, LevelFilter::WARN);
        assert_eq!(LogOptions::default().format, LogFormat::Text);
    }

    #[test]
    fn reads_format_and_level() {
        let opts = LogOptions::from_vars(Some("JSON"), Some("debug"));

        assert_eq!(opts.format, LogFormat::Json);
        assert_eq!(opts.level, LevelFilter::DEBUG);
    }

    #[test]
    fn level_accepts_off() {
        assert_eq!(LogOptions::from_vars(None, Some("off")).level, LevelFilter::OFF);
    }

    #[test]
    fn garbage_keeps_defaults() {
        assert_eq!(
            LogOptions::from_vars(Some("yaml"), Some("loud")),
            LogOptions::default()
        );
    }
}
