//! Infrastructure errors. Lexical errors are diagnostics, not `LexError`s.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("failed to read source text")]
    Read(#[source] io::Error),
    #[error("failed to write lexer output")]
    Write(#[source] io::Error),
}
