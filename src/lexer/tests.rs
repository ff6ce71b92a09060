//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers, integer literals and string literals
//! - Newline normalization and deduplication
//! - Line and block comments
//! - Sign characters and position tracking
//! - Error cases

use crate::Position;

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("x _ _x foo_123 CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "_");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text, "_x");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].text, "foo_123");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].text, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("0 123 45").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].text, "0");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].text, "123");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].text, "45");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_leading_zero_rejected() {
    let result = tokenize("01");

    let error = result.unwrap_err();
    assert!(error.is_lex_error());
    assert_eq!(error.get_error_name(), "InvalidNumber");
}

#[test]
fn test_tokenize_zero_alone() {
    let tokens = tokenize("0").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].text, "0");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""" "str" "multiple words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "");
    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].text, "str");
    assert_eq!(tokens[2].kind, TokenKind::Str);
    assert_eq!(tokens[2].text, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes_kept_verbatim() {
    // Escape sequences are copied as-is, backslash included.
    let tokens = tokenize(r#""a\"b" "n\nn""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, r#"a\"b"#);
    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].text, r"n\nn");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    for source in [r#"""#, r#""abc"#, r#""abc\""#] {
        let error = tokenize(source).unwrap_err();
        assert_eq!(error.get_error_name(), "UnterminatedString");
        assert_eq!(*error.get_position(), Position::new(1, 1));
    }
}

#[test]
fn test_tokenize_newline_variants() {
    for source in ["\n", "\r\n"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Newline);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_newline_dedup() {
    // Runs of blank lines collapse into a single Newline token.
    for source in ["\n\n", "\r\n\r\n", "\n\r\n", "\r\n\n", "\n\n\n\n"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2, "source {:?}", source);
        assert_eq!(tokens[0].kind, TokenKind::Newline);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_lone_cr() {
    for source in ["\r", "\rx", "x\ry"] {
        let error = tokenize(source).unwrap_err();
        assert_eq!(error.get_error_name(), "MissingLf");
    }
}

#[test]
fn test_tokenize_line_comments() {
    for source in [";comment", "//comment", "; comment with spaces"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "source {:?}", source);
        assert_eq!(tokens[0].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_line_comment_keeps_newline() {
    let tokens = tokenize("x ;c\ny").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text, "y");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_comments() {
    for source in ["/**/", "/* comment */", "/* \n */", "/* ** */"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "source {:?}", source);
        assert_eq!(tokens[0].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    for source in ["/*", "/* comment", "/* *"] {
        let error = tokenize(source).unwrap_err();
        assert_eq!(error.get_error_name(), "UnterminatedBlockComment");
        assert_eq!(*error.get_position(), Position::new(1, 1));
    }
}

#[test]
fn test_tokenize_block_comment_tracks_rows() {
    let tokens = tokenize("/* a\nb */x").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[0].position, Position::new(2, 5));
}

#[test]
fn test_tokenize_signs() {
    let tokens = tokenize("= + - * / \\ ,").unwrap();

    for (i, text) in ["=", "+", "-", "*", "/", "\\", ","].iter().enumerate() {
        assert_eq!(tokens[i].kind, TokenKind::Sign);
        assert_eq!(tokens[i].text, *text);
    }
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unknown_character() {
    let error = tokenize("x = @").unwrap_err();

    assert!(error.is_lex_error());
    assert_eq!(error.get_error_name(), "UnknownCharacter");
    assert_eq!(*error.get_position(), Position::new(1, 5));
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  x   =   42  ").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Sign);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("x y\nz").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1)); // x
    assert_eq!(tokens[1].position, Position::new(1, 3)); // y
    assert_eq!(tokens[3].position, Position::new(2, 1)); // z
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].position, Position::new(2, 2));
}

#[test]
fn test_tokenize_crlf_positions() {
    let tokens = tokenize("a\r\nb").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1)); // a
    assert_eq!(tokens[2].position, Position::new(2, 1)); // b
}

#[test]
fn test_tokenize_spans_cover_source() {
    // Each token's position points at the exact source slice it was
    // scanned from; everything in between is whitespace, a comment or
    // a newline. Guards the row/column bookkeeping across comments
    // and escapes.
    let sources = [
        "x = 12 + foo ; trailing\n",
        "mes \"a\\\"b\",y /* mid */ ,0\n",
        "  a\t//c\nbb\r\ncc",
        "w=1 /* a\nb */ +2\n",
    ];

    for source in sources {
        let lines: Vec<Vec<char>> = source
            .split('\n')
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        let tokens = tokenize(source).unwrap();

        for token in &tokens {
            let consumed = match token.kind {
                TokenKind::EOF | TokenKind::Newline => continue,
                TokenKind::Str => format!("\"{}\"", token.text),
                _ => token.text.clone(),
            };
            let line = &lines[(token.position.row - 1) as usize];
            let start = (token.position.column - 1) as usize;
            let span: String = line[start..]
                .iter()
                .take(consumed.chars().count())
                .collect();
            assert_eq!(span, consumed, "source {:?} token {}", source, token);
        }
    }
}

#[test]
fn test_tokenize_after_multibyte_string() {
    // Non-ASCII characters inside a string must not skew the scan of
    // the tokens that follow it.
    let tokens = tokenize("mes \"héllo\",42\n").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].text, "héllo");
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].text, "42");
    assert_eq!(tokens[3].position, Position::new(1, 13));
}

#[test]
fn test_tokenize_statement_line() {
    let tokens = tokenize("x=1+2\n").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Sign,
            TokenKind::Int,
            TokenKind::Sign,
            TokenKind::Int,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_ends_with_single_eof() {
    for source in ["", "x", "x\n", "; comment", "1+2"] {
        let tokens = tokenize(source).unwrap();
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::EOF).count();
        assert_eq!(eof_count, 1, "source {:?}", source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_no_consecutive_newline_tokens() {
    let tokens = tokenize("a\n\n\nb\r\n\r\nc\n").unwrap();

    for pair in tokens.windows(2) {
        assert!(
            pair[0].kind != TokenKind::Newline || pair[1].kind != TokenKind::Newline,
            "consecutive newline tokens"
        );
    }
}
