//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Statements are matched by trying a
//! fixed list of alternatives in order; expressions use two tiers of
//! left-folded precedence climbing. Sub-grammar matchers report
//! "no match" as an ordinary outcome (`Option<MatchResult>`), distinct
//! from the hard `Error` path that only the top level raises.

pub mod expr;
pub mod parser;
pub mod stmt;
