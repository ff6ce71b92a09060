use crate::{
    ast::node::Node,
    lexer::tokens::{Token, TokenKind},
};

use super::parser::MatchResult;

const ADDITIVE_SIGNS: [&str; 2] = ["+", "-"];
const MULTIPLICATIVE_SIGNS: [&str; 3] = ["*", "/", "\\"];

/// `expr := addExpr | labelLiteral`
///
/// The label literal is only reachable when the additive tier fails to
/// match at all, i.e. an expression position starting with `*`.
pub fn match_expr(tokens: &[Token]) -> Option<MatchResult> {
    if let Some(m) = match_add_expr(tokens) {
        return Some(m);
    }

    match_label_literal(tokens)
}

// `*name` used as a value rather than a statement.
fn match_label_literal(tokens: &[Token]) -> Option<MatchResult> {
    if !tokens.first()?.is_sign("*") {
        return None;
    }
    let name = tokens.get(1)?;
    if name.kind != TokenKind::Identifier {
        return None;
    }

    let node = Node::LabelLiteral(Box::new(Node::Atom(name.clone())));
    Some(MatchResult::new(node, 2))
}

fn match_add_expr(tokens: &[Token]) -> Option<MatchResult> {
    match_binary_tier(tokens, &ADDITIVE_SIGNS, match_mul_expr)
}

fn match_mul_expr(tokens: &[Token]) -> Option<MatchResult> {
    match_binary_tier(tokens, &MULTIPLICATIVE_SIGNS, match_atom)
}

/// One precedence tier: `operand (sign operand)*`, folded left to right
/// so that `1+2-3` becomes `(- (+ 1 2) 3)`. A single operand with no
/// operators is returned unwrapped; a dangling operator makes the whole
/// tier a no-match.
fn match_binary_tier(
    tokens: &[Token],
    signs: &[&str],
    match_operand: fn(&[Token]) -> Option<MatchResult>,
) -> Option<MatchResult> {
    let first = match_operand(tokens)?;
    let mut left = first.value;
    let mut i = first.consumed;

    while i < tokens.len()
        && tokens[i].kind == TokenKind::Sign
        && signs.contains(&tokens[i].text.as_str())
    {
        let operator = tokens[i].text.clone();
        let m = match_operand(&tokens[i + 1..])?;
        left = Node::binary(&operator, left, m.value);
        i += 1 + m.consumed;
    }

    Some(MatchResult::new(left, i))
}

// `atom := ID | INT | STR`
fn match_atom(tokens: &[Token]) -> Option<MatchResult> {
    let token = tokens.first()?;
    match token.kind {
        TokenKind::Identifier | TokenKind::Int | TokenKind::Str => {
            Some(MatchResult::new(Node::Atom(token.clone()), 1))
        }
        _ => None,
    }
}
