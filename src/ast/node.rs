use std::fmt::{self, Display, Write};

use crate::lexer::tokens::Token;

/// A node of the abstract syntax tree.
///
/// Nodes are built bottom-up by the parser and never mutated afterwards.
/// Equality is structural; an `Atom` compares by its token's kind and
/// text only (token positions are metadata).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered sequence of statements; the root of every parse.
    Stmts(Vec<Node>),
    /// A blank line. Produced by matching, dropped before reaching `Stmts`.
    EmptyStmt,
    /// `*name` at statement position. Child: the name `Atom`.
    LabelStmt(Box<Node>),
    /// `target = expr`. Children: target `Atom`, value expression.
    AssignStmt(Box<Node>, Box<Node>),
    /// `name arg, arg, ...`. Children: callee `Atom`, `Args`.
    CallStmt(Box<Node>, Box<Node>),
    /// Ordered call arguments, with `Default` for omitted slots.
    Args(Vec<Node>),
    /// Placeholder for an omitted call argument.
    Default,
    /// `*name` at expression position. Child: the name `Atom`.
    LabelLiteral(Box<Node>),
    AddExpr(Box<Node>, Box<Node>),
    SubExpr(Box<Node>, Box<Node>),
    MulExpr(Box<Node>, Box<Node>),
    DivExpr(Box<Node>, Box<Node>),
    ModExpr(Box<Node>, Box<Node>),
    /// Leaf expression wrapping a single identifier/literal token.
    Atom(Token),
}

impl Node {
    /// Stable per-node label used by dumps and tree printing.
    pub fn label(&self) -> &'static str {
        match self {
            Node::Stmts(_) => "Stmts",
            Node::EmptyStmt => "Empty",
            Node::LabelStmt(_) => "Label",
            Node::AssignStmt(..) => "=",
            Node::CallStmt(..) => "Call",
            Node::Args(_) => "Args",
            Node::Default => "Default",
            Node::LabelLiteral(_) => "LabelLit",
            Node::AddExpr(..) => "+",
            Node::SubExpr(..) => "-",
            Node::MulExpr(..) => "*",
            Node::DivExpr(..) => "/",
            Node::ModExpr(..) => "\\",
            Node::Atom(_) => "Atom",
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Stmts(items) | Node::Args(items) => items.iter().collect(),
            Node::LabelStmt(child) | Node::LabelLiteral(child) => vec![child],
            Node::AssignStmt(left, right)
            | Node::CallStmt(left, right)
            | Node::AddExpr(left, right)
            | Node::SubExpr(left, right)
            | Node::MulExpr(left, right)
            | Node::DivExpr(left, right)
            | Node::ModExpr(left, right) => vec![left, right],
            Node::EmptyStmt | Node::Default | Node::Atom(_) => vec![],
        }
    }

    /// Builds the binary expression node for an operator sign.
    pub fn binary(operator: &str, left: Node, right: Node) -> Node {
        let left = Box::new(left);
        let right = Box::new(right);
        match operator {
            "+" => Node::AddExpr(left, right),
            "-" => Node::SubExpr(left, right),
            "*" => Node::MulExpr(left, right),
            "/" => Node::DivExpr(left, right),
            "\\" => Node::ModExpr(left, right),
            other => unreachable!("not a binary operator sign: {:?}", other),
        }
    }

    /// Writes the tree one node per line, indented two spaces per level.
    pub fn write_tree(&self, out: &mut impl Write, nest_level: usize) -> fmt::Result {
        let indent = "  ".repeat(nest_level);

        match self {
            Node::Atom(token) => writeln!(out, "{}Atom:{}", indent, token),
            _ => {
                writeln!(out, "{}{}", indent, self.label())?;
                for child in self.children() {
                    child.write_tree(out, nest_level + 1)?;
                }
                Ok(())
            }
        }
    }

    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut out, 0);
        out
    }
}

// Compact one-line s-expression form, e.g. `(Stmts (= ID[x] 1))`.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Node::Atom(token) = self {
            return write!(f, "{}", token);
        }

        let children = self.children();
        if children.is_empty() {
            return write!(f, "{}", self.label());
        }

        write!(f, "({}", self.label())?;
        for child in children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
