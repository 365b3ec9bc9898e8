//! Character code constants and the 8-bit character classifier.

use siglex_options::ClassifierProfile;

pub const SPACE: u8 = b' ';
pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';
pub const ASTERISK: u8 = b'*';
pub const COMMA: u8 = b',';
pub const COLON: u8 = b':';
pub const SEMICOLON: u8 = b';';

/// Control characters 8 through 15 (backspace .. shift in) count as whitespace.
const CONTROL_SPACE_START: u8 = 8;
const CONTROL_SPACE_END: u8 = 15;

/// The category the dispatch loop switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Space,
    Letter,
    Digit,
    Delimiter,
    Error,
    EndOfInput,
}

/// A fixed table mapping every 8-bit character to its [`CharClass`].
#[derive(Debug, Clone)]
pub struct CharClassifier {
    table: [CharClass; 256],
}

impl CharClassifier {
    /// Build the table for a profile. Characters not listed are `Error`.
    pub fn new(profile: ClassifierProfile, delimiters: impl IntoIterator<Item = u8>) -> Self {
        let mut table = [CharClass::Error; 256];

        for dm in delimiters {
            table[dm as usize] = CharClass::Delimiter;
        }

        match profile {
            ClassifierProfile::Standard => {
                mark(&mut table, b'A'..=b'Z', CharClass::Letter);
                mark(&mut table, b'a'..=b'z', CharClass::Letter);
                mark(&mut table, b'0'..=b'9', CharClass::Digit);
            }
            ClassifierProfile::Legacy => {
                mark(&mut table, b'A'..b'Z', CharClass::Letter);
                mark(&mut table, b'0'..b'9', CharClass::Digit);
            }
        }

        mark(
            &mut table,
            CONTROL_SPACE_START..=CONTROL_SPACE_END,
            CharClass::Space,
        );
        table[SPACE as usize] = CharClass::Space;

        Self { table }
    }

    /// Classify the current character; `None` is the end of the stream.
    #[inline]
    pub fn classify(&self, ch: Option<u8>) -> CharClass {
        match ch {
            Some(b) => self.table[b as usize],
            None => CharClass::EndOfInput,
        }
    }

    #[inline]
    pub fn is_letter_or_digit(&self, ch: Option<u8>) -> bool {
        matches!(self.classify(ch), CharClass::Letter | CharClass::Digit)
    }
}

fn mark(table: &mut [CharClass; 256], range: impl Iterator<Item = u8>, class: CharClass) {
    for b in range {
        table[b as usize] = class;
    }
}

/// Render a raw byte as a one-character string. Bytes are read as Latin-1
/// (U+0000..U+00FF), so diagnostic text stays valid UTF-8 and a byte above
/// 0x7F is written as its two-byte UTF-8 encoding.
#[inline]
pub fn byte_to_string(b: u8) -> String {
    char::from(b).to_string()
}
