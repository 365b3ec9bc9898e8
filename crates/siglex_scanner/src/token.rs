//! Lexemes produced by the scanner.

use siglex_core::text::SourcePosition;

use crate::catalog::{Delimiter, Keyword};

/// First code of the delimiter block. A delimiter's code is its character value.
pub const DELIMITER_START: u32 = 0;
/// First code of the numeric constant block.
pub const DIGIT_START: u32 = 400;
/// First code of the keyword block.
pub const KEYWORD_START: u32 = 700;
/// First code of the identifier block.
pub const ID_START: u32 = 800;

/// The category of a lexeme, with its index inside that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    Delimiter(Delimiter),
    /// Index into the constant table.
    Constant(usize),
    Keyword(Keyword),
    /// Index into the identifier table.
    Identifier(usize),
}

impl LexemeKind {
    /// The numeric code written to the listing.
    pub fn code(self) -> u32 {
        match self {
            LexemeKind::Delimiter(dm) => DELIMITER_START + u32::from(dm.byte()),
            LexemeKind::Constant(index) => DIGIT_START + index as u32,
            LexemeKind::Keyword(kw) => KEYWORD_START + kw.index() as u32,
            LexemeKind::Identifier(index) => ID_START + index as u32,
        }
    }

    /// Whether the code has run past its block into the next one. Only
    /// constants can: the 301st distinct constant gets 700, like `PROGRAM`.
    pub fn code_overflows_block(self) -> bool {
        match self {
            LexemeKind::Constant(index) => index >= (KEYWORD_START - DIGIT_START) as usize,
            LexemeKind::Keyword(kw) => kw.index() >= (ID_START - KEYWORD_START) as usize,
            LexemeKind::Delimiter(_) | LexemeKind::Identifier(_) => false,
        }
    }

    pub fn is_constant(self) -> bool {
        matches!(self, LexemeKind::Constant(_))
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, LexemeKind::Keyword(_))
    }

    pub fn is_identifier(self) -> bool {
        matches!(self, LexemeKind::Identifier(_))
    }
}

/// A classified, positioned unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    /// Position of the lexeme's first character.
    pub position: SourcePosition,
    /// The literal source text.
    pub text: String,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, position: SourcePosition, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }
}
