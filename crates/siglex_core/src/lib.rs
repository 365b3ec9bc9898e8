//! siglex_core: Core utilities for the siglex signal-language lexer.
//!
//! Provides source positions, the line/column tracker, and the ordered
//! symbol table used for identifiers, constants and keywords.

pub mod collections;
pub mod text;

// Re-export commonly used types
pub use collections::SymbolTable;
pub use text::{PositionTracker, SourcePosition};
