//! The keyword and delimiter catalog shared by every scanner.
//!
//! The catalog (classifier table, keyword table, delimiter list) is
//! immutable and built at most once per process for each
//! [`ClassifierProfile`]. Scanners borrow it; none of them mutate it.

use std::fmt;
use std::sync::OnceLock;

use siglex_core::SymbolTable;
use siglex_options::ClassifierProfile;

use crate::char_codes::*;

/// A reserved word of the signal language. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    Program,
    Begin,
    End,
    Va,
    Signal,
    Complex,
    Integer,
    Float,
    BlockFloat,
    Ext,
}

impl Keyword {
    /// All keywords in catalog order. A keyword's index here is its table index.
    pub const ALL: [Keyword; 10] = [
        Keyword::Program,
        Keyword::Begin,
        Keyword::End,
        Keyword::Va,
        Keyword::Signal,
        Keyword::Complex,
        Keyword::Integer,
        Keyword::Float,
        Keyword::BlockFloat,
        Keyword::Ext,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Keyword::Program => "PROGRAM",
            Keyword::Begin => "BEGIN",
            Keyword::End => "END",
            Keyword::Va => "VA",
            Keyword::Signal => "SIGNAL",
            Keyword::Complex => "COMPLEX",
            Keyword::Integer => "INTEGER",
            Keyword::Float => "FLOAT",
            Keyword::BlockFloat => "BLOCKFLOAT",
            Keyword::Ext => "EXT",
        }
    }

    /// Position in the keyword table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Keyword> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A single-character punctuation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Semicolon,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
}

impl Delimiter {
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Semicolon,
        Delimiter::Comma,
        Delimiter::Colon,
        Delimiter::OpenParen,
        Delimiter::CloseParen,
    ];

    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Semicolon => SEMICOLON,
            Delimiter::Comma => COMMA,
            Delimiter::Colon => COLON,
            Delimiter::OpenParen => OPEN_PAREN,
            Delimiter::CloseParen => CLOSE_PAREN,
        }
    }

    pub fn from_byte(b: u8) -> Option<Delimiter> {
        Self::ALL.iter().copied().find(|dm| dm.byte() == b)
    }

    pub fn text(self) -> &'static str {
        match self {
            Delimiter::Semicolon => ";",
            Delimiter::Comma => ",",
            Delimiter::Colon => ":",
            Delimiter::OpenParen => "(",
            Delimiter::CloseParen => ")",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The read-only tables every scanner consults.
#[derive(Debug)]
pub struct Catalog {
    profile: ClassifierProfile,
    classifier: CharClassifier,
    keywords: SymbolTable,
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();
static LEGACY: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide catalog for `profile`, built on first use.
    pub fn shared(profile: ClassifierProfile) -> &'static Catalog {
        let cell = match profile {
            ClassifierProfile::Standard => &STANDARD,
            ClassifierProfile::Legacy => &LEGACY,
        };
        cell.get_or_init(|| Catalog::build(profile))
    }

    /// The catalog with the standard classifier.
    pub fn standard() -> &'static Catalog {
        Self::shared(ClassifierProfile::Standard)
    }

    fn build(profile: ClassifierProfile) -> Self {
        tracing::debug!(?profile, "building lexer catalog");
        Self {
            profile,
            classifier: CharClassifier::new(profile, Delimiter::ALL.iter().map(|dm| dm.byte())),
            keywords: SymbolTable::from_entries(Keyword::ALL.iter().map(|kw| kw.text())),
        }
    }

    pub fn profile(&self) -> ClassifierProfile {
        self.profile
    }

    #[inline]
    pub fn classify(&self, ch: Option<u8>) -> CharClass {
        self.classifier.classify(ch)
    }

    #[inline]
    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn lookup_keyword(&self, text: &str) -> Option<Keyword> {
        self.keywords.lookup(text).and_then(Keyword::from_index)
    }

    pub fn lookup_delimiter(&self, b: u8) -> Option<Delimiter> {
        Delimiter::from_byte(b)
    }

    pub fn keywords(&self) -> &SymbolTable {
        &self.keywords
    }
}
