//! siglex_scanner: Lexer for the signal description language.
//!
//! Converts source text into classified lexemes, each with a numeric code,
//! a line/column position and its literal text, while building the
//! identifier and constant tables and collecting lexical errors.
//!
//! Recognized input:
//! - Keywords `PROGRAM`, `BEGIN`, `END`, `VA`, `SIGNAL`, `COMPLEX`,
//!   `INTEGER`, `FLOAT`, `BLOCKFLOAT`, `EXT` (case-sensitive)
//! - Identifiers and unsigned digit-run constants
//! - Delimiters `;` `,` `:` `(` `)`
//! - Block comments `(* ... *)`

mod analyzer;
mod catalog;
pub mod char_codes;
mod error;
pub mod listing;
mod scanner;
mod token;

pub use analyzer::Analyzer;
pub use catalog::{Catalog, Delimiter, Keyword};
pub use char_codes::CharClass;
pub use error::LexError;
pub use scanner::{ScanOutput, Scanner};
pub use token::{Lexeme, LexemeKind, DELIMITER_START, DIGIT_START, ID_START, KEYWORD_START};

/// Scan `source` with the standard catalog.
pub fn tokenize(source: &str) -> Result<ScanOutput, LexError> {
    Scanner::new(Catalog::standard(), source.as_bytes()).scan()
}
