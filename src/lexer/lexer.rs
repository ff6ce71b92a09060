use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new("^[0-9]+").unwrap();
}

const SIGN_CHARS: [char; 7] = ['=', '+', '-', '*', '/', '\\', ','];

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    text: &'src str,
    source: Vec<char>,
    pos: usize,
    // Byte offset matching `pos`; keeps `remainder` a cheap slice.
    byte_pos: usize,
    row: u32,
    // Index of the first character of the current line; columns are
    // measured from here.
    column_origin: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            tokens: vec![],
            text: source,
            source: source.chars().collect(),
            pos: 0,
            byte_pos: 0,
            row: 1,
            column_origin: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for c in &self.source[self.pos..self.pos + n] {
            self.byte_pos += c.len_utf8();
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn remainder(&self) -> &'src str {
        &self.text[self.byte_pos..]
    }

    pub fn get_pos(&self) -> Position {
        Position::new(self.row, (self.pos - self.column_origin + 1) as u32)
    }

    fn begin_line(&mut self) {
        self.row += 1;
        self.column_origin = self.pos;
    }

    // Consecutive blank lines collapse into a single Newline token.
    fn push_newline(&mut self, position: Position) {
        if self.tokens.last().map(|t| t.kind) != Some(TokenKind::Newline) {
            self.push(MK_TOKEN!(
                TokenKind::Newline,
                String::from("<LF>"),
                position
            ));
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let c = lex.at();

        match c {
            ' ' | '\t' => lex.advance_n(1),
            '\n' => {
                let position = lex.get_pos();
                lex.push_newline(position);
                lex.advance_n(1);
                lex.begin_line();
            }
            '\r' => {
                // A bare CR is not a newline; it must pair with an LF.
                lex.advance_n(1);
                if lex.at_eof() || lex.at() != '\n' {
                    return Err(Error::new(ErrorImpl::MissingLf, lex.get_pos()));
                }
                // The Newline token is positioned at the LF, same as in
                // the LF-only case.
                let position = lex.get_pos();
                lex.push_newline(position);
                lex.advance_n(1);
                lex.begin_line();
            }
            ';' => skip_line_comment(&mut lex),
            '/' if lex.peek(1) == Some('/') => skip_line_comment(&mut lex),
            '/' if lex.peek(1) == Some('*') => skip_block_comment(&mut lex)?,
            '"' => scan_string(&mut lex)?,
            c if c.is_ascii_digit() => scan_number(&mut lex)?,
            c if c.is_ascii_alphabetic() || c == '_' => scan_identifier(&mut lex),
            c if SIGN_CHARS.contains(&c) => {
                lex.push(MK_TOKEN!(TokenKind::Sign, c.to_string(), lex.get_pos()));
                lex.advance_n(1);
            }
            c => {
                return Err(Error::new(
                    ErrorImpl::UnknownCharacter { character: c },
                    lex.get_pos(),
                ));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("<EOF>"), lex.get_pos()));
    Ok(lex.tokens)
}

// Consumes up to, but not including, the end of the line; the newline
// itself is handled by the main loop.
fn skip_line_comment(lex: &mut Lexer) {
    while !lex.at_eof() {
        let c = lex.at();
        if c == '\r' || c == '\n' {
            break;
        }
        lex.advance_n(1);
    }
}

fn skip_block_comment(lex: &mut Lexer) -> Result<(), Error> {
    let open_pos = lex.get_pos();
    lex.advance_n(2);

    let mut closed = false;
    while !lex.at_eof() {
        match lex.at() {
            '*' => {
                lex.advance_n(1);
                if !lex.at_eof() && lex.at() == '/' {
                    lex.advance_n(1);
                    closed = true;
                    break;
                }
            }
            '\n' => {
                lex.advance_n(1);
                lex.begin_line();
            }
            '\r' => {
                lex.advance_n(1);
                if lex.at_eof() || lex.at() != '\n' {
                    return Err(Error::new(ErrorImpl::MissingLf, lex.get_pos()));
                }
                lex.advance_n(1);
                lex.begin_line();
            }
            _ => lex.advance_n(1),
        }
    }

    if !closed {
        return Err(Error::new(ErrorImpl::UnterminatedBlockComment, open_pos));
    }

    Ok(())
}

// The token text is the raw content between the quotes; a backslash
// escapes exactly the next character and is kept verbatim, not decoded.
fn scan_string(lex: &mut Lexer) -> Result<(), Error> {
    let open_pos = lex.get_pos();
    lex.advance_n(1);

    let mut text = String::new();
    let mut closed = false;
    while !lex.at_eof() {
        let c = lex.at();
        if c == '"' {
            lex.advance_n(1);
            closed = true;
            break;
        }
        if c == '\\' {
            text.push(c);
            lex.advance_n(1);
            if lex.at_eof() {
                break;
            }
            text.push(lex.at());
            lex.advance_n(1);
            continue;
        }
        text.push(c);
        lex.advance_n(1);
    }

    if !closed {
        return Err(Error::new(ErrorImpl::UnterminatedString, open_pos));
    }

    lex.push(MK_TOKEN!(TokenKind::Str, text, open_pos));
    Ok(())
}

fn scan_number(lex: &mut Lexer) -> Result<(), Error> {
    let position = lex.get_pos();
    let run = DIGIT_RUN
        .find(lex.remainder())
        .unwrap()
        .as_str()
        .to_string();

    // Leading zeros are disallowed except for the literal `0` itself.
    if run.len() >= 2 && run.starts_with('0') {
        return Err(Error::new(
            ErrorImpl::InvalidNumber { literal: run },
            position,
        ));
    }

    lex.advance_n(run.len());
    lex.push(MK_TOKEN!(TokenKind::Int, run, position));
    Ok(())
}

fn scan_identifier(lex: &mut Lexer) {
    let position = lex.get_pos();
    let run = IDENTIFIER_RUN
        .find(lex.remainder())
        .unwrap()
        .as_str()
        .to_string();

    lex.advance_n(run.len());
    lex.push(MK_TOKEN!(TokenKind::Identifier, run, position));
}
