use std::io::Write;

use log::{debug, trace};

use crate::{
    ast::{ast::Node, statements::BlockStmt},
    errors::errors::{Error, ErrorImpl},
    symbol_table::registry::{Registry, VarId},
    Position,
};

use super::{
    expr::{eval_assignment, eval_binary, eval_unary},
    stmt::{exec_block, exec_if, exec_print, exec_while},
};

/// Executes a program against a variable registry, writing `print` output to
/// `output`.
pub struct Evaluator<W: Write> {
    registry: Registry,
    output: W,
}

impl<W: Write> Evaluator<W> {
    pub fn new(registry: Registry, output: W) -> Self {
        Evaluator { registry, output }
    }

    /// Runs every top-level statement in order, stopping at the first error.
    pub fn run(&mut self, program: &BlockStmt) -> Result<(), Error> {
        debug!("executing {} top-level statements", program.body.len());

        for statement in program.iter() {
            trace!("executing statement at line {}", statement.get_span().start.line);
            self.evaluate(statement)?;
        }

        self.output.flush().map_err(|error| {
            Error::new(
                ErrorImpl::OutputError {
                    message: error.to_string(),
                },
                program.span.end.clone(),
            )
        })
    }

    /// Evaluates one node. Statements without a meaningful value yield 0.
    pub fn evaluate(&mut self, node: &Node) -> Result<f64, Error> {
        match node {
            Node::Number(expr) => Ok(expr.value),
            Node::Variable(expr) => self.read(expr.id, &expr.span.start),
            Node::Assignment(expr) => eval_assignment(self, expr),
            Node::Unary(expr) => eval_unary(self, expr),
            Node::Binary(expr) => eval_binary(self, expr),
            // Text only has meaning as a print argument
            Node::String(_) => Ok(0.0),
            Node::Block(stmt) => exec_block(self, stmt),
            Node::Print(stmt) => exec_print(self, stmt),
            Node::If(stmt) => exec_if(self, stmt),
            Node::While(stmt) => exec_while(self, stmt),
        }
    }

    pub fn read(&self, id: VarId, position: &Position) -> Result<f64, Error> {
        self.registry.read(id, position)
    }

    pub fn write(&mut self, id: VarId, value: f64, position: &Position) -> Result<(), Error> {
        self.registry.write(id, value, position)
    }

    /// Writes `line` followed by a newline to the output.
    pub fn write_line(&mut self, line: &str, position: &Position) -> Result<(), Error> {
        writeln!(self.output, "{}", line).map_err(|error| {
            Error::new(
                ErrorImpl::OutputError {
                    message: error.to_string(),
                },
                position.clone(),
            )
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
