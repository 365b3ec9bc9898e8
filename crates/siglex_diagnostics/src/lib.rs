//! siglex_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Lexical errors never abort an analysis. They are recorded as
//! [`Diagnostic`] values carrying the offending position and a message
//! resolved from the [`messages`] catalog, and reported as
//! `Lexer error at <line>:<column> <message>`.

use siglex_core::text::SourcePosition;
use std::fmt;

/// A diagnostic message template with a code.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1001).
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized lexical error with its position and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the scanner stood when the error was recorded.
    pub position: SourcePosition,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic error code.
    pub code: u32,
}

impl Diagnostic {
    pub fn new(position: SourcePosition, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            position,
            message_text: format_message(message.message, args),
            code: message.code,
        }
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

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at {} {}", self.position, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The diagnostics recorded during one analysis, in scan order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Number of diagnostics carrying the given message code.
    pub fn count_of(&self, message: &DiagnosticMessage) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.code == message.code)
            .count()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER_MET_0: DiagnosticMessage = diag!(1001, "Unexpected character met '{0}'");
    pub const DELIMITER_OR_SPACE_EXPECTED: DiagnosticMessage = diag!(1002, "Delimiter or space expected");
    pub const END_OF_COMMENT_EXPECTED: DiagnosticMessage = diag!(1003, "End of comment expected");
}
