use crate::{symbol_table::registry::VarId, Span};

use super::ast::{BinaryOperator, Node, UnaryOperator};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Variable Expression
/// A reference to a variable, already resolved to its identity.
#[derive(Debug, Clone)]
pub struct VariableExpr {
    pub id: VarId,
    pub name: String,
    pub span: Span,
}

/// String Expression
///
/// `text` is the literal with every `{name}` marker removed. Each entry of
/// `sites` records the byte offset in `text` where the marker stood and the
/// variable whose value is spliced in there at print time. Offsets are
/// non-decreasing.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub text: String,
    pub sites: Vec<(usize, VarId)>,
    pub span: Span,
}

// COMPLEX

/// Assignment Expression
///
/// Also produced by `var` declarations; `value` is `None` for `var x;`.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub target: VariableExpr,
    pub value: Option<Box<Node>>,
    pub span: Span,
}

/// Unary Expression
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Node>,
    pub span: Span,
}

/// Binary Expression
/// `operator_span` is kept so run-time errors can point at the operator.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Node>,
    pub operator: BinaryOperator,
    pub operator_span: Span,
    pub right: Box<Node>,
    pub span: Span,
}
