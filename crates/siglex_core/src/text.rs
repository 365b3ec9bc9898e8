//! Source position types for line/column tracking.
//!
//! The lexer reports every lexeme and diagnostic by line and column rather
//! than by byte offset, so positions are tracked incrementally while the
//! input stream is consumed.

use std::fmt;

/// A position in source text as a 1-based line and column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SourcePosition {
    /// Create a new source position.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a source.
    #[inline]
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tracks the line and column of the character about to be consumed.
///
/// Every consumed character advances the column. Consuming a newline moves
/// to the next line and resets the column to 0 before that advance, so the
/// first character of the new line sits at column 1.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    position: SourcePosition,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self {
            position: SourcePosition::start(),
        }
    }

    /// The position of the current (not yet consumed) character.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Record that `consumed` has been read past.
    #[inline]
    pub fn advance(&mut self, consumed: u8) {
        if consumed == b'\n' {
            self.position.line += 1;
            self.position.column = 0;
        }
        self.position.column += 1;
    }
}
