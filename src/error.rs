//! Typed error hierarchy for assembly and configuration failures.
//!
//! Runtime (per-cycle) anomalies are not represented here: they are
//! recoverable and go through the diagnostics log in [`crate::stats`]
//! instead of aborting via `Result`.

use thiserror::Error;

/// Errors raised while building an instruction image from source text.
///
/// Any of these abort initialization before a [`crate::sim::Simulator`]
/// is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    #[error("bad register operand '{0}'")]
    BadRegister(String),

    #[error("bad immediate operand '{0}'")]
    BadImmediate(String),

    #[error("immediate {value} out of range for {format} format (line {line})")]
    ImmediateOutOfRange {
        value: i64,
        format: &'static str,
        line: usize,
    },

    #[error("unresolved label '{0}'")]
    UnresolvedLabel(String),

    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),

    #[error("malformed memory operand '{0}'")]
    MalformedMemoryOperand(String),

    #[error("program contains no instructions")]
    EmptyProgram,
}

/// Errors raised while loading a [`crate::config::Config`] from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
