//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes signal-language constructs.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use siglex_diagnostics::messages;
use siglex_options::ClassifierProfile;
use siglex_scanner::{
    tokenize, Catalog, Delimiter, Keyword, LexemeKind, ScanOutput, Scanner, DIGIT_START, ID_START,
};

fn scan(source: &str) -> ScanOutput {
    tokenize(source).unwrap()
}

/// Helper: scan all lexemes and return as (kind, text) pairs.
fn scan_all(source: &str) -> Vec<(LexemeKind, String)> {
    scan(source)
        .lexemes
        .into_iter()
        .map(|l| (l.kind, l.text))
        .collect()
}

/// Helper: scan all lexeme kinds.
fn scan_kinds(source: &str) -> Vec<LexemeKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

/// Helper: (line, column) of every lexeme.
fn scan_positions(source: &str) -> Vec<(u32, u32)> {
    scan(source)
        .lexemes
        .iter()
        .map(|l| (l.line(), l.column()))
        .collect()
}

#[test]
fn test_empty_source() {
    let output = scan("");
    assert!(output.lexemes.is_empty());
    assert_eq!(output.error_count(), 0);
}

#[test]
fn test_whitespace_only() {
    let output = scan("   \n\t  \r\n \x0b\x0c");
    assert!(output.lexemes.is_empty());
    assert_eq!(output.error_count(), 0);
}

#[test]
fn test_program_header() {
    let output = scan("PROGRAM test; BEGIN END");
    assert_eq!(output.error_count(), 0);
    assert_eq!(
        output.lexemes.iter().map(|l| l.kind).collect::<Vec<_>>(),
        vec![
            LexemeKind::Keyword(Keyword::Program),
            LexemeKind::Identifier(0),
            LexemeKind::Delimiter(Delimiter::Semicolon),
            LexemeKind::Keyword(Keyword::Begin),
            LexemeKind::Keyword(Keyword::End),
        ]
    );
    let codes: Vec<_> = output.lexemes.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec![700, 800, 59, 701, 702]);
    assert_eq!(scan_positions("PROGRAM test; BEGIN END"), vec![(1, 1), (1, 9), (1, 13), (1, 15), (1, 21)]);
}

#[test]
fn test_all_keywords() {
    let kinds = scan_kinds("PROGRAM BEGIN END VA SIGNAL COMPLEX INTEGER FLOAT BLOCKFLOAT EXT");
    let expected: Vec<_> = Keyword::ALL.iter().map(|kw| LexemeKind::Keyword(*kw)).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let output = scan("PROGRAM program Program");
    assert_eq!(
        output.lexemes.iter().map(|l| l.kind).collect::<Vec<_>>(),
        vec![
            LexemeKind::Keyword(Keyword::Program),
            LexemeKind::Identifier(0),
            LexemeKind::Identifier(1),
        ]
    );
    assert_eq!(output.identifiers.iter().collect::<Vec<_>>(), vec!["program", "Program"]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let kinds = scan_kinds("PROGRAMS ENDX VA1");
    assert_eq!(
        kinds,
        vec![
            LexemeKind::Identifier(0),
            LexemeKind::Identifier(1),
            LexemeKind::Identifier(2),
        ]
    );
}

#[test]
fn test_repeated_identifier_reuses_code() {
    let output = scan("alpha, beta, alpha");
    let codes: Vec<_> = output
        .lexemes
        .iter()
        .filter(|l| l.kind.is_identifier())
        .map(|l| l.code())
        .collect();
    assert_eq!(codes, vec![ID_START, ID_START + 1, ID_START]);
    assert_eq!(output.identifiers.len(), 2);
    assert_eq!(output.identifiers.lookup("alpha"), Some(0));
}

#[test]
fn test_repeated_constant_reuses_code() {
    let output = scan("SIGNAL x: 42, 7, 42;");
    let constants: Vec<_> = output
        .lexemes
        .iter()
        .filter(|l| l.kind.is_constant())
        .map(|l| (l.code(), l.text.as_str()))
        .collect();
    assert_eq!(
        constants,
        vec![(DIGIT_START, "42"), (DIGIT_START + 1, "7"), (DIGIT_START, "42")]
    );
    assert_eq!(output.constants.len(), 2);
    assert!(output.is_success());
}

#[test]
fn test_identifier_with_digits() {
    let all = scan_all("x1y2 9");
    assert_eq!(
        all,
        vec![
            (LexemeKind::Identifier(0), "x1y2".to_string()),
            (LexemeKind::Constant(0), "9".to_string()),
        ]
    );
}

#[test]
fn test_identifier_stops_at_delimiter() {
    let kinds = scan_kinds("abc;def");
    assert_eq!(
        kinds,
        vec![
            LexemeKind::Identifier(0),
            LexemeKind::Delimiter(Delimiter::Semicolon),
            LexemeKind::Identifier(1),
        ]
    );
}

#[test]
fn test_malformed_numeric_literal() {
    let output = scan("12a");
    assert_eq!(output.error_count(), 1);
    assert_eq!(output.diagnostics.count_of(&messages::DELIMITER_OR_SPACE_EXPECTED), 1);
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!((diag.line(), diag.column()), (1, 3));

    assert_eq!(output.lexemes.len(), 1);
    assert_eq!(output.lexemes[0].kind, LexemeKind::Constant(0));
    assert_eq!(output.lexemes[0].text, "12");
    assert_eq!(output.lexemes[0].column(), 1);
}

#[test]
fn test_malformed_literal_skips_one_character() {
    // `ab` loses its `a`; `b` is scanned as an identifier.
    let output = scan("12ab");
    assert_eq!(output.error_count(), 1);
    assert_eq!(
        output.lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
        vec!["12", "b"]
    );
}

#[test]
fn test_numeric_literal_before_delimiter() {
    let output = scan("(1,2)");
    assert!(output.is_success());
    assert_eq!(
        output.lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
        vec!["(", "1", ",", "2", ")"]
    );
    assert_eq!(scan_positions("(1,2)"), vec![(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)]);
}

#[test]
fn test_unterminated_comment() {
    let output = scan("(* unterminated");
    assert!(output.lexemes.is_empty());
    assert_eq!(output.error_count(), 1);
    assert_eq!(output.diagnostics.count_of(&messages::END_OF_COMMENT_EXPECTED), 1);
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.to_string(), "Lexer error at 1:16 End of comment expected");
}

#[test]
fn test_comment_is_elided() {
    let output = scan("(*comment*) VA");
    assert!(output.is_success());
    assert_eq!(output.lexemes.len(), 1);
    assert_eq!(output.lexemes[0].kind, LexemeKind::Keyword(Keyword::Va));
    assert_eq!(output.lexemes[0].column(), 13);
}

#[test]
fn test_multiline_comment_tracks_lines() {
    let source = "BEGIN (* first\nsecond\n*) END";
    let output = scan(source);
    assert!(output.is_success());
    assert_eq!(scan_positions(source), vec![(1, 1), (3, 4)]);
}

#[test]
fn test_parenthesized_list_is_not_comment() {
    let kinds = scan_kinds("( * )");
    // `*` is not a valid character on its own.
    assert_eq!(
        kinds,
        vec![
            LexemeKind::Delimiter(Delimiter::OpenParen),
            LexemeKind::Delimiter(Delimiter::CloseParen),
        ]
    );
    assert_eq!(scan("( * )").error_count(), 1);
}

#[test]
fn test_unexpected_characters_recover() {
    let output = scan("A = B + 1");
    assert_eq!(output.error_count(), 2);
    let rendered: Vec<_> = output
        .diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "Lexer error at 1:3 Unexpected character met '='",
            "Lexer error at 1:7 Unexpected character met '+'",
        ]
    );
    assert_eq!(output.lexemes.len(), 3);
}

#[test]
fn test_positions_across_lines() {
    let source = "PROGRAM p;\n  SIGNAL s: INTEGER;\nEND";
    assert_eq!(
        scan_positions(source),
        vec![(1, 1), (1, 9), (1, 10), (2, 3), (2, 10), (2, 11), (2, 13), (2, 20), (3, 1)]
    );
}

#[test]
fn test_full_program() {
    let source = "\
PROGRAM filter;
(* coefficient block *)
BEGIN
  SIGNAL x, y: COMPLEX;
  BLOCKFLOAT k: 16;
  EXT VA(x, 16);
END";
    let output = scan(source);
    assert!(output.is_success(), "{:?}", output.diagnostics);
    assert_eq!(output.identifiers.iter().collect::<Vec<_>>(), vec!["filter", "x", "y", "k"]);
    assert_eq!(output.constants.iter().collect::<Vec<_>>(), vec!["16"]);
    let sixteen: Vec<_> = output
        .lexemes
        .iter()
        .filter(|l| l.text == "16")
        .map(|l| l.code())
        .collect();
    assert_eq!(sixteen, vec![400, 400]);
}

#[test]
fn test_texts_reconstruct_source() {
    let source = "PROGRAM p; (* note *) BEGIN   SIGNAL a,b:FLOAT;\nEND";
    let joined = scan(source)
        .lexemes
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, "PROGRAM p ; BEGIN SIGNAL a , b : FLOAT ; END");
}

#[test]
fn test_legacy_classifier_profile() {
    let catalog = Catalog::shared(ClassifierProfile::Legacy);
    let output = Scanner::new(catalog, "ZETA 19".as_bytes()).scan().unwrap();
    // `Z` is not a letter and `9` not a digit under the legacy ranges.
    assert_eq!(output.error_count(), 2);
    assert_eq!(
        output.lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
        vec!["ETA", "1"]
    );
}

#[test]
fn test_scanners_do_not_share_tables() {
    let first = scan("a b c");
    let second = scan("c");
    assert_eq!(first.identifiers.len(), 3);
    assert_eq!(second.identifiers.len(), 1);
    assert_eq!(second.lexemes[0].kind, LexemeKind::Identifier(0));
}

proptest! {
    #[test]
    fn prop_whitespace_only_yields_nothing(source in "[ \t\n\r\x08\x0b\x0c]{0,64}") {
        let output = scan(&source);
        prop_assert!(output.lexemes.is_empty());
        prop_assert_eq!(output.error_count(), 0);
    }

    #[test]
    fn prop_identifier_table_has_no_duplicates(
        words in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..20)
    ) {
        let source = words.join(" ");
        let output = scan(&source);
        prop_assert_eq!(output.error_count(), 0);

        let mut unique = words.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(output.identifiers.len(), unique.len());

        for (lexeme, word) in output.lexemes.iter().zip(&words) {
            prop_assert_eq!(&lexeme.text, word);
            prop_assert_eq!(Some(lexeme.code() - ID_START), output.identifiers.lookup(word).map(|i| i as u32));
        }
    }

    #[test]
    fn prop_constants_are_deduplicated(numbers in proptest::collection::vec("[0-9]{1,5}", 1..20)) {
        let source = numbers.join(", ");
        let output = scan(&source);
        prop_assert_eq!(output.error_count(), 0);
        for lexeme in output.lexemes.iter().filter(|l| l.kind.is_constant()) {
            let index = output.constants.lookup(&lexeme.text).map(|i| i as u32);
            prop_assert_eq!(Some(lexeme.code() - DIGIT_START), index);
        }
    }
}
