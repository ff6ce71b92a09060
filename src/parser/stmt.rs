use crate::{
    ast::node::Node,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::match_expr, parser::MatchResult};

/// Tries each statement alternative in order; the first whose span is
/// followed by a `Newline` wins, and the newline is consumed as part of
/// the statement. An alternative whose span is not newline-terminated
/// counts as not matching at all.
pub fn match_stmt(tokens: &[Token]) -> Option<MatchResult> {
    let alternatives: [fn(&[Token]) -> Option<MatchResult>; 4] = [
        match_empty_stmt,
        match_label_stmt,
        match_assign_stmt,
        match_call_stmt,
    ];

    for alternative in alternatives {
        if let Some(m) = alternative(tokens) {
            if token_kind(tokens, m.consumed) == Some(TokenKind::Newline) {
                return Some(MatchResult::new(m.value, m.consumed + 1));
            }
        }
    }

    None
}

fn token_kind(tokens: &[Token], index: usize) -> Option<TokenKind> {
    tokens.get(index).map(|t| t.kind)
}

// Zero-width: the newline itself is consumed by the terminator check
// in match_stmt.
fn match_empty_stmt(tokens: &[Token]) -> Option<MatchResult> {
    if tokens.first()?.kind != TokenKind::Newline {
        return None;
    }

    Some(MatchResult::new(Node::EmptyStmt, 0))
}

// `*name`
fn match_label_stmt(tokens: &[Token]) -> Option<MatchResult> {
    if !tokens.first()?.is_sign("*") {
        return None;
    }
    let name = tokens.get(1)?;
    if name.kind != TokenKind::Identifier {
        return None;
    }

    let node = Node::LabelStmt(Box::new(Node::Atom(name.clone())));
    Some(MatchResult::new(node, 2))
}

// `target = expr`
fn match_assign_stmt(tokens: &[Token]) -> Option<MatchResult> {
    if tokens.first()?.kind != TokenKind::Identifier {
        return None;
    }
    if !tokens.get(1)?.is_sign("=") {
        return None;
    }

    let m = match_expr(&tokens[2..])?;

    let target = Node::Atom(tokens[0].clone());
    let node = Node::AssignStmt(Box::new(target), Box::new(m.value));
    Some(MatchResult::new(node, 2 + m.consumed))
}

// `name arg, arg, ...` — consecutive commas denote omitted arguments,
// represented by `Default` placeholders (`f a,,b` passes three).
fn match_call_stmt(tokens: &[Token]) -> Option<MatchResult> {
    if tokens.first()?.kind != TokenKind::Identifier {
        return None;
    }

    let mut args = vec![];
    let mut i = 1;

    match token_kind(tokens, i) {
        Some(TokenKind::Newline) | Some(TokenKind::EOF) | None => {
            // No arguments.
        }
        _ if tokens[i].is_sign(",") => {
            // Omitted leading argument; the comma is consumed by the
            // loop below.
            args.push(Node::Default);
        }
        _ => {
            let m = match_expr(&tokens[i..])?;
            args.push(m.value);
            i += m.consumed;
        }
    }

    while i < tokens.len() && tokens[i].is_sign(",") {
        i += 1;
        match match_expr(&tokens[i..]) {
            Some(m) => {
                args.push(m.value);
                i += m.consumed;
            }
            None => args.push(Node::Default),
        }
    }

    let callee = Node::Atom(tokens[0].clone());
    let node = Node::CallStmt(Box::new(callee), Box::new(Node::Args(args)));
    Some(MatchResult::new(node, i))
}
