use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before every question was answered.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
}
