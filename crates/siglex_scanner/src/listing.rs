//! The tabular lexeme listing.
//!
//! Four left-aligned columns, `Code`, `Line`, `Column` and `Name`, padded to
//! fixed widths. The header is followed by an empty line, then one row per
//! lexeme.

use std::io::{self, Write};

use crate::token::Lexeme;

pub const CODE_WIDTH: usize = 10;
pub const LINE_WIDTH: usize = 10;
pub const COLUMN_WIDTH: usize = 10;
pub const NAME_WIDTH: usize = 30;

fn write_row<W: Write>(out: &mut W, code: &str, line: &str, column: &str, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{:<cw$}{:<lw$}{:<colw$}{:<nw$}",
        code,
        line,
        column,
        name,
        cw = CODE_WIDTH,
        lw = LINE_WIDTH,
        colw = COLUMN_WIDTH,
        nw = NAME_WIDTH,
    )
}

/// Write the header and one row per lexeme.
pub fn write_listing<W: Write>(out: &mut W, lexemes: &[Lexeme]) -> io::Result<()> {
    write_row(out, "Code", "Line", "Column", "Name")?;
    writeln!(out)?;
    for lexeme in lexemes {
        write_row(
            out,
            &lexeme.code().to_string(),
            &lexeme.line().to_string(),
            &lexeme.column().to_string(),
            &lexeme.text,
        )?;
    }
    Ok(())
}

/// Render the listing into a string.
pub fn render_listing(lexemes: &[Lexeme]) -> io::Result<String> {
    let mut buf = Vec::new();
    write_listing(&mut buf, lexemes)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
