//! The analyzer: one scanner pass bound to an input and an output sink.
//!
//! Lexical errors are written to the sink as `Lexer error at <line>:<column>
//! <message>` lines in scan order, followed by the listing when requested.

use std::io::{Read, Write};

use siglex_options::LexerOptions;

use crate::catalog::Catalog;
use crate::error::LexError;
use crate::listing::write_listing;
use crate::scanner::{ScanOutput, Scanner};

pub struct Analyzer<'c, R, W> {
    catalog: &'c Catalog,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Analyzer<'static, R, W> {
    /// An analyzer using the standard catalog.
    pub fn new(input: R, output: W) -> Self {
        Self::with_catalog(Catalog::standard(), input, output)
    }

    /// An analyzer using the catalog selected by `options`.
    pub fn with_options(options: &LexerOptions, input: R, output: W) -> Self {
        Self::with_catalog(Catalog::shared(options.classifier), input, output)
    }
}

impl<'c, R: Read, W: Write> Analyzer<'c, R, W> {
    pub fn with_catalog(catalog: &'c Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Scan the whole input once. The returned output reports success when
    /// no lexical error was recorded.
    pub fn analyze(mut self, print_listing: bool) -> Result<ScanOutput, LexError> {
        let result = Scanner::new(self.catalog, self.input).scan()?;

        for diagnostic in &result.diagnostics {
            writeln!(self.output, "{}", diagnostic).map_err(LexError::Write)?;
        }
        if print_listing {
            write_listing(&mut self.output, &result.lexemes).map_err(LexError::Write)?;
        }
        self.output.flush().map_err(LexError::Write)?;

        Ok(result)
    }
}
