//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The top level repeatedly matches one statement at the current token
//! until end of input, accumulating the results into a `Stmts` node.
//! Individual productions are speculative: they take the remaining
//! token slice and either return the node they built together with the
//! number of tokens it consumed, or report no match so the next
//! alternative can be tried.

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::match_stmt;

/// Result of a successful sub-grammar match.
#[derive(Debug)]
pub struct MatchResult {
    /// The node the production built.
    pub value: Node,
    /// How many tokens of the input slice it consumed.
    pub consumed: usize,
}

impl MatchResult {
    pub fn new(value: Node, consumed: usize) -> Self {
        MatchResult { value, consumed }
    }
}

/// The main parser structure: the token stream plus the current
/// position in it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// The not-yet-consumed tail of the token stream.
    pub fn rest(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns true while there are tokens left before the EOF marker.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// Empty statements (blank lines) are matched but not collected. Fails
/// with an `UnexpectedToken` error naming the offending token when no
/// statement alternative matches.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    let mut stmts = vec![];

    while parser.has_tokens() {
        match match_stmt(parser.rest()) {
            Some(m) => {
                if m.value != Node::EmptyStmt {
                    stmts.push(m.value);
                }
                parser.advance_n(m.consumed);
            }
            None => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.to_string(),
                    },
                    token.position,
                ));
            }
        }
    }

    Ok(Node::Stmts(stmts))
}
