use std::slice::Iter;

use crate::Span;

use super::ast::Node;

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Node>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.body.iter()
    }
}

/// `print(expr);`, where `value` is a `Node::String` for interpolated text.
#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub value: Box<Node>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Box<Node>,
    pub then_body: Box<Node>,
    pub else_body: Option<Box<Node>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Box<Node>,
    pub body: Box<Node>,
    pub span: Span,
}
