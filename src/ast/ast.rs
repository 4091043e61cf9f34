use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{
    expressions::{AssignmentExpr, BinaryExpr, NumberExpr, StringExpr, UnaryExpr, VariableExpr},
    statements::{BlockStmt, IfStmt, PrintStmt, WhileStmt},
};

/// Every node the parser can build.
///
/// Each node exclusively owns its children; the tree is never shared and is
/// not modified after parsing.
#[derive(Debug, Clone)]
pub enum Node {
    Number(NumberExpr),
    Variable(VariableExpr),
    Assignment(AssignmentExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    String(StringExpr),
    Block(BlockStmt),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Node {
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Number(expr) => &expr.span,
            Node::Variable(expr) => &expr.span,
            Node::Assignment(expr) => &expr.span,
            Node::Unary(expr) => &expr.span,
            Node::Binary(expr) => &expr.span,
            Node::String(expr) => &expr.span,
            Node::Block(stmt) => &stmt.span,
            Node::Print(stmt) => &stmt.span,
            Node::If(stmt) => &stmt.span,
            Node::While(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dash => Some(UnaryOperator::Negate),
            TokenKind::Not => Some(UnaryOperator::Not),
            _ => None,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::And => BinaryOperator::And,
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::Equals => BinaryOperator::Equals,
            TokenKind::NotEquals => BinaryOperator::NotEquals,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEquals => BinaryOperator::LessEquals,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Dash => BinaryOperator::Subtract,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::Caret => BinaryOperator::Power,
            _ => return None,
        };
        Some(operator)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "^",
        };
        write!(f, "{}", symbol)
    }
}
