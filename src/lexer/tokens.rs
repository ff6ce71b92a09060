use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Str,
    Identifier,
    Sign,
    Newline,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

// Position is metadata, not identity: two tokens are equal when kind
// and text agree, wherever they came from.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "ID[{}]", self.text),
            TokenKind::Int => write!(f, "{}", self.text),
            TokenKind::Str => write!(f, "\"{}\"", self.text),
            TokenKind::Sign => write!(f, "SIGN[{}]", self.text),
            TokenKind::Newline => write!(f, "\\n"),
            TokenKind::EOF => write!(f, "EOF"),
        }
    }
}

impl Token {
    /// True for a `Sign` token carrying exactly `text`.
    pub fn is_sign(&self, text: &str) -> bool {
        self.kind == TokenKind::Sign && self.text == text
    }

    pub fn debug(&self) {
        println!("{} {}", self, self.position);
    }
}
