use std::io::Write;

use crate::{
    ast::{
        ast::Node,
        statements::{BlockStmt, IfStmt, PrintStmt, WhileStmt},
    },
    errors::errors::Error,
};

use super::{evaluator::Evaluator, expr::render_string, format::format_number};

/// Runs the statements in order. Scopes were resolved while parsing, so
/// nothing is pushed here; a loop body reuses the same variable slots on
/// every iteration.
pub fn exec_block<W: Write>(evaluator: &mut Evaluator<W>, block: &BlockStmt) -> Result<f64, Error> {
    for statement in block.iter() {
        evaluator.evaluate(statement)?;
    }

    Ok(0.0)
}

pub fn exec_print<W: Write>(evaluator: &mut Evaluator<W>, stmt: &PrintStmt) -> Result<f64, Error> {
    let line = match stmt.value.as_ref() {
        Node::String(string) => render_string(evaluator, string)?,
        value => format_number(evaluator.evaluate(value)?),
    };

    evaluator.write_line(&line, &stmt.span.start)?;
    Ok(0.0)
}

pub fn exec_if<W: Write>(evaluator: &mut Evaluator<W>, stmt: &IfStmt) -> Result<f64, Error> {
    if evaluator.evaluate(&stmt.condition)? != 0.0 {
        evaluator.evaluate(&stmt.then_body)?;
    } else if let Some(else_body) = &stmt.else_body {
        evaluator.evaluate(else_body)?;
    }

    Ok(0.0)
}

/// No iteration limit: a condition that never becomes 0 loops forever.
pub fn exec_while<W: Write>(evaluator: &mut Evaluator<W>, stmt: &WhileStmt) -> Result<f64, Error> {
    while evaluator.evaluate(&stmt.condition)? != 0.0 {
        evaluator.evaluate(&stmt.body)?;
    }

    Ok(0.0)
}
