//! Error type for the shell around the engine.
//!
//! The engine itself is infallible; these cover configuration, seed loading
//! and terminal I/O.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The command line could not be parsed.
    #[error("invalid arguments: {0}")]
    Options(#[from] getopts::Fail),

    /// An option was given a value of the wrong shape.
    #[error("invalid value {value:?} for --{option}")]
    InvalidValue { option: &'static str, value: String },

    /// `--pattern` named a pattern that does not exist.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    /// A run-length encoded pattern was malformed.
    #[error("bad pattern on line {line}: {message}")]
    Pattern { line: usize, message: String },
}
