//! The signal-language scanner.
//!
//! A character-driven automaton: the dispatch loop classifies the current
//! character and hands control to one sub-scanner (whitespace, identifier,
//! numeric literal, delimiter or comment). Each sub-scanner consumes what it
//! recognizes, emits at most one lexeme or diagnostic, and returns to the
//! loop. The input is read strictly forward, one byte at a time.

use std::io::{self, Read};

use siglex_core::text::{PositionTracker, SourcePosition};
use siglex_core::SymbolTable;
use siglex_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use tracing::{debug, trace, warn};

use crate::catalog::{Catalog, Delimiter};
use crate::char_codes::*;
use crate::error::LexError;
use crate::token::{Lexeme, LexemeKind};

/// Everything one analysis produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Lexemes in source order. Comments and whitespace are elided.
    pub lexemes: Vec<Lexeme>,
    /// Identifier table; an identifier's index is its code minus `ID_START`.
    pub identifiers: SymbolTable,
    /// Constant table; a constant's index is its code minus `DIGIT_START`.
    pub constants: SymbolTable,
    /// Lexical errors in the order they were met.
    pub diagnostics: DiagnosticCollection,
}

impl ScanOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    /// Whether the analysis recorded no lexical errors.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Per-session scanner state. One scanner performs exactly one pass over
/// its input; [`Scanner::scan`] consumes it.
pub struct Scanner<'c, R> {
    catalog: &'c Catalog,
    input: io::Bytes<R>,
    /// The character under the cursor; `None` once the stream is exhausted.
    current: Option<u8>,
    /// Number of bytes consumed so far.
    pos: usize,
    tracker: PositionTracker,
    lexemes: Vec<Lexeme>,
    identifiers: SymbolTable,
    constants: SymbolTable,
    diagnostics: DiagnosticCollection,
}

impl<'c, R: Read> Scanner<'c, R> {
    /// Create a scanner over `input`. Wrap unbuffered readers in a `BufReader`.
    pub fn new(catalog: &'c Catalog, input: R) -> Self {
        Self {
            catalog,
            input: input.bytes(),
            current: None,
            pos: 0,
            tracker: PositionTracker::new(),
            lexemes: Vec::new(),
            identifiers: SymbolTable::new(),
            constants: SymbolTable::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Run the dispatch loop until the input is exhausted.
    pub fn scan(mut self) -> Result<ScanOutput, LexError> {
        debug!(profile = ?self.catalog.profile(), "scan started");
        self.current = self.read_byte()?;

        loop {
            match self.catalog.classify(self.current) {
                CharClass::Space => self.scan_space()?,
                CharClass::Letter => self.scan_identifier()?,
                CharClass::Digit => self.scan_number()?,
                CharClass::Delimiter => self.scan_delimiter()?,
                CharClass::Error => self.scan_unexpected()?,
                CharClass::EndOfInput => break,
            }
        }

        debug!(
            bytes = self.pos,
            lexemes = self.lexemes.len(),
            identifiers = self.identifiers.len(),
            constants = self.constants.len(),
            errors = self.diagnostics.len(),
            "scan finished"
        );

        Ok(ScanOutput {
            lexemes: self.lexemes,
            identifiers: self.identifiers,
            constants: self.constants,
            diagnostics: self.diagnostics,
        })
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, LexError> {
        self.input.next().transpose().map_err(LexError::Read)
    }

    /// Consume the current character and load the next one.
    fn advance(&mut self) -> Result<(), LexError> {
        if let Some(ch) = self.current {
            self.tracker.advance(ch);
            self.pos += 1;
        }
        self.current = self.read_byte()?;
        Ok(())
    }

    #[inline]
    fn class(&self) -> CharClass {
        self.catalog.classify(self.current)
    }

    #[inline]
    fn position(&self) -> SourcePosition {
        self.tracker.position()
    }

    fn report(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let diagnostic = Diagnostic::new(self.position(), message, args);
        debug!(
            line = diagnostic.line(),
            column = diagnostic.column(),
            code = diagnostic.code,
            "{}",
            diagnostic.message_text
        );
        self.diagnostics.add(diagnostic);
    }

    fn push_lexeme(&mut self, kind: LexemeKind, position: SourcePosition, text: String) {
        trace!(
            code = kind.code(),
            line = position.line,
            column = position.column,
            text = %text,
            "lexeme"
        );
        self.lexemes.push(Lexeme::new(kind, position, text));
    }

    /// Append the current character to `buffer` and advance.
    fn take_into(&mut self, buffer: &mut String) -> Result<(), LexError> {
        if let Some(ch) = self.current {
            buffer.push(char::from(ch));
        }
        self.advance()
    }

    // ========================================================================
    // Sub-scanners
    // ========================================================================

    fn scan_space(&mut self) -> Result<(), LexError> {
        while self.class() == CharClass::Space {
            self.advance()?;
        }
        Ok(())
    }

    fn scan_unexpected(&mut self) -> Result<(), LexError> {
        if let Some(ch) = self.current {
            let text = byte_to_string(ch);
            self.report(&messages::UNEXPECTED_CHARACTER_MET_0, &[text.as_str()]);
        }
        self.advance()
    }

    /// Keyword, known identifier, or a new identifier, in that order.
    fn scan_identifier(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let mut buffer = String::new();
        self.take_into(&mut buffer)?;
        while self.catalog.classifier().is_letter_or_digit(self.current) {
            self.take_into(&mut buffer)?;
        }

        let kind = match self.catalog.lookup_keyword(&buffer) {
            Some(keyword) => LexemeKind::Keyword(keyword),
            None => LexemeKind::Identifier(self.identifiers.intern(&buffer).0),
        };
        self.push_lexeme(kind, start, buffer);
        Ok(())
    }

    /// A digit run. It must be followed by whitespace, a delimiter, or the
    /// end of input; otherwise the offending character is reported and
    /// skipped, and the digits read so far are still recorded.
    fn scan_number(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let mut buffer = String::new();
        while self.class() == CharClass::Digit {
            self.take_into(&mut buffer)?;
        }

        if !matches!(
            self.class(),
            CharClass::Space | CharClass::Delimiter | CharClass::EndOfInput
        ) {
            self.report(&messages::DELIMITER_OR_SPACE_EXPECTED, &[]);
            self.advance()?;
        }

        let (index, inserted) = self.constants.intern(&buffer);
        let kind = LexemeKind::Constant(index);
        if inserted && kind.code_overflows_block() {
            warn!(
                code = kind.code(),
                line = start.line,
                column = start.column,
                text = %buffer,
                "constant code overlaps the keyword block"
            );
        }
        self.push_lexeme(kind, start, buffer);
        Ok(())
    }

    fn scan_delimiter(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let Some(ch) = self.current else {
            return Ok(());
        };

        if ch == OPEN_PAREN {
            self.advance()?;
            if self.current == Some(ASTERISK) {
                self.advance()?;
                return self.scan_comment(start);
            }
            // The character after `(` is left for the dispatch loop.
            let dm = Delimiter::OpenParen;
            self.push_lexeme(LexemeKind::Delimiter(dm), start, dm.text().to_string());
            return Ok(());
        }

        if let Some(dm) = self.catalog.lookup_delimiter(ch) {
            self.push_lexeme(LexemeKind::Delimiter(dm), start, dm.text().to_string());
        }
        self.advance()
    }

    /// Skip a block comment whose `(*` opener has been consumed.
    fn scan_comment(&mut self, start: SourcePosition) -> Result<(), LexError> {
        loop {
            while self.current != Some(ASTERISK) {
                if self.current.is_none() {
                    self.report(&messages::END_OF_COMMENT_EXPECTED, &[]);
                    return Ok(());
                }
                self.advance()?;
            }
            self.advance()?;
            if self.current == Some(CLOSE_PAREN) {
                break;
            }
        }
        self.advance()?;
        trace!(line = start.line, column = start.column, "comment skipped");
        Ok(())
    }
}
