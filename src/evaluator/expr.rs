use std::io::Write;

use log::trace;

use crate::{
    ast::{
        ast::{BinaryOperator, UnaryOperator},
        expressions::{AssignmentExpr, BinaryExpr, StringExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{evaluator::Evaluator, format::format_interpolated};

fn truth(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Evaluates the right-hand side (0 when absent), stores it and returns it.
pub fn eval_assignment<W: Write>(
    evaluator: &mut Evaluator<W>,
    expr: &AssignmentExpr,
) -> Result<f64, Error> {
    let value = match &expr.value {
        Some(value) => evaluator.evaluate(value)?,
        None => 0.0,
    };

    evaluator.write(expr.target.id, value, &expr.target.span.start)?;
    Ok(value)
}

pub fn eval_unary<W: Write>(evaluator: &mut Evaluator<W>, expr: &UnaryExpr) -> Result<f64, Error> {
    let operand = evaluator.evaluate(&expr.operand)?;
    trace!("{}{}", expr.operator, operand);

    Ok(match expr.operator {
        UnaryOperator::Negate => -operand,
        UnaryOperator::Not => truth(operand == 0.0),
    })
}

/// `&&` and `||` only evaluate their right operand when the left one does not
/// decide the result.
pub fn eval_binary<W: Write>(
    evaluator: &mut Evaluator<W>,
    expr: &BinaryExpr,
) -> Result<f64, Error> {
    let left = evaluator.evaluate(&expr.left)?;

    match expr.operator {
        BinaryOperator::And if left == 0.0 => return Ok(0.0),
        BinaryOperator::Or if left != 0.0 => return Ok(1.0),
        _ => {}
    }

    let right = evaluator.evaluate(&expr.right)?;
    trace!("{} {} {}", left, expr.operator, right);

    apply_binary(expr.operator, left, right)
        .map_err(|error| Error::new(error, expr.operator_span.start.clone()))
}

/// Applies `operator` to two already evaluated operands.
pub fn apply_binary(operator: BinaryOperator, left: f64, right: f64) -> Result<f64, ErrorImpl> {
    let value = match operator {
        BinaryOperator::And => truth(left != 0.0 && right != 0.0),
        BinaryOperator::Or => truth(left != 0.0 || right != 0.0),
        BinaryOperator::Equals => truth(left == right),
        BinaryOperator::NotEquals => truth(left != right),
        BinaryOperator::Less => truth(left < right),
        BinaryOperator::LessEquals => truth(left <= right),
        BinaryOperator::Greater => truth(left > right),
        BinaryOperator::GreaterEquals => truth(left >= right),
        BinaryOperator::Add => left + right,
        BinaryOperator::Subtract => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => {
            if right == 0.0 {
                return Err(ErrorImpl::DivisionByZero);
            }
            left / right
        }
        BinaryOperator::Modulo => {
            // Operands are rounded to the nearest integer; the remainder
            // takes the sign of the dividend.
            let (left, right) = (left.round() as i64, right.round() as i64);
            if right == 0 {
                return Err(ErrorImpl::ModuloByZero);
            }
            left.wrapping_rem(right) as f64
        }
        BinaryOperator::Power => left.powf(right),
    };

    Ok(value)
}

/// Rebuilds the text of an interpolated string using the current value of
/// each referenced variable.
pub fn render_string<W: Write>(
    evaluator: &Evaluator<W>,
    expr: &StringExpr,
) -> Result<String, Error> {
    let mut result = String::with_capacity(expr.text.len());
    let mut last = 0;

    for (offset, id) in &expr.sites {
        result.push_str(&expr.text[last..*offset]);
        let value = evaluator.read(*id, &expr.span.start)?;
        result.push_str(&format_interpolated(value));
        last = *offset;
    }

    result.push_str(&expr.text[last..]);
    Ok(result)
}
