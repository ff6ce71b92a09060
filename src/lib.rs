#![allow(clippy::module_inception)]

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A row/column location in the source text.
///
/// Rows and columns are both 1-based; a row ends at a logical newline
/// (LF or CRLF counted as one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }

    /// The first character of the source.
    pub fn start() -> Self {
        Position { row: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row:{} column:{})", self.row, self.column)
    }
}

/// Tokenizes and parses `source` in one call.
pub fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}

pub fn get_line_in_source(source: &str, row: u32) -> String {
    source
        .split('\n')
        .nth(row.saturating_sub(1) as usize)
        .unwrap_or("")
        .trim_end_matches('\r')
        .to_string()
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> script.txt
           |
        20 | x = #
           | ----^
    */

    let position = error.get_position();
    let line_text = get_line_in_source(source, position.row);

    let row_string = position.row.to_string();
    let padding = row_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", row_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
