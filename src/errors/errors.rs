use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Position;

/// A positioned scanning or parsing failure.
///
/// Errors are immediately fatal to the `tokenize`/`parse` call that
/// raised them; there is no recovery and no partial result.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingLf => "MissingLf",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::UnknownCharacter { .. } => "UnknownCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    /// True for errors raised while scanning.
    pub fn is_lex_error(&self) -> bool {
        !self.is_parse_error()
    }

    /// True for errors raised while parsing the token stream.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedToken { .. })
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingLf => ErrorTip::Suggestion(String::from(
                "a carriage return must be followed by a line feed",
            )),
            ErrorImpl::UnterminatedBlockComment => ErrorTip::Suggestion(String::from(
                "block comment is never closed, expected `*/`",
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "string literal is never closed, expected `\"`",
            )),
            ErrorImpl::InvalidNumber { literal } => ErrorTip::Suggestion(format!(
                "invalid number `{}`, leading zeros are not allowed",
                literal
            )),
            ErrorImpl::UnknownCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "unexpected token {}, did you forget a newline?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.internal_error, self.position)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("missing LF")]
    MissingLf,
    #[error("missing \"*/\"")]
    UnterminatedBlockComment,
    #[error("missing closing quote")]
    UnterminatedString,
    #[error("invalid number {literal:?}")]
    InvalidNumber { literal: String },
    #[error("unknown character '{character}'")]
    UnknownCharacter { character: char },
    #[error("unexpected token {token}")]
    UnexpectedToken { token: String },
}
