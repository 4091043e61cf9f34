use crate::{
    ast::{
        ast::{BinaryOperator, Node, UnaryOperator},
        expressions::{AssignmentExpr, BinaryExpr, NumberExpr, StringExpr, UnaryExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    symbol_table::registry::VarId,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

type LevelParser = fn(&mut Parser) -> Result<Node, Error>;

/// Parses a full expression, starting at the lowest precedence level.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_logical_expr(parser)
}

pub fn parse_logical_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_left_associative(parser, BindingPower::Logical, parse_comparison_expr)
}

/// Comparisons do not associate: `a < b < c` is rejected.
pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_additive_expr(parser)?;

    if parser.current_binding_power() != BindingPower::Relational {
        return Ok(left);
    }

    let operator_token = parser.advance().clone();
    let right = parse_additive_expr(parser)?;

    if parser.current_binding_power() == BindingPower::Relational {
        return Err(Error::new(
            ErrorImpl::ChainedComparison {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    build_binary_expr(left, &operator_token, right)
}

pub fn parse_additive_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_left_associative(parser, BindingPower::Additive, parse_multiplicative_expr)
}

pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_left_associative(parser, BindingPower::Multiplicative, parse_power_expr)
}

/// `^` is right-associative: the exponent recurses into this same level.
pub fn parse_power_expr(parser: &mut Parser) -> Result<Node, Error> {
    let base = parse_unary_expr(parser)?;

    if parser.current_binding_power() != BindingPower::Power {
        return Ok(base);
    }

    let operator_token = parser.advance().clone();
    let exponent = parse_power_expr(parser)?;

    build_binary_expr(base, &operator_token, exponent)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let Some(operator) = UnaryOperator::from_token_kind(parser.current_token_kind()) else {
        return parse_primary_expr(parser);
    };

    let operator_token = parser.advance().clone();
    let operand = parse_unary_expr(parser)?;

    Ok(Node::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;

            Ok(Node::Number(NumberExpr {
                value,
                span: parser.advance().span.clone(),
            }))
        }
        TokenKind::Identifier if parser.peek_token_kind() == TokenKind::Assignment => {
            parse_assignment_expr(parser)
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Node::Variable(resolve_variable(parser, token)?))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(expr)
        }
        TokenKind::String => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("string literals may only be used as the argument of print"),
            },
            parser.get_position(),
        )),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// `name = expr`, usable anywhere a primary is. The right-hand side is a full
/// expression, so assignments chain to the right.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Node, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    let target = resolve_variable(parser, name_token)?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Node::Assignment(AssignmentExpr {
        span: Span {
            start: target.span.start.clone(),
            end: value.get_span().end.clone(),
        },
        target,
        value: Some(Box::new(value)),
    }))
}

/// Parses a string literal, binding each `{name}` marker to the variable it
/// names in the current scope.
pub fn parse_string_literal(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::String)?;
    let (text, sites) = split_interpolation(parser, &token)?;

    Ok(Node::String(StringExpr {
        text,
        sites,
        span: token.span,
    }))
}

fn split_interpolation(
    parser: &Parser,
    token: &Token,
) -> Result<(String, Vec<(usize, VarId)>), Error> {
    let literal = token.value.as_str();
    let mut text = String::with_capacity(literal.len());
    let mut sites = Vec::new();
    let mut rest = literal;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);

        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::new(
                ErrorImpl::UnterminatedInterpolation {
                    literal: literal.to_string(),
                },
                token.span.start.clone(),
            )
        })?;

        let name = after[..close].trim();
        if name.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyInterpolation {
                    literal: literal.to_string(),
                },
                token.span.start.clone(),
            ));
        }

        let id = parser.symbols().resolve(name, token.span.start.clone())?;
        sites.push((text.len(), id));

        rest = &after[close + 1..];
    }

    text.push_str(rest);
    Ok((text, sites))
}

fn resolve_variable(parser: &Parser, token: Token) -> Result<VariableExpr, Error> {
    let id = parser
        .symbols()
        .resolve(&token.value, token.span.start.clone())?;

    Ok(VariableExpr {
        id,
        name: token.value,
        span: token.span,
    })
}

fn parse_left_associative(
    parser: &mut Parser,
    level: BindingPower,
    next: LevelParser,
) -> Result<Node, Error> {
    let mut left = next(parser)?;

    while parser.current_binding_power() == level {
        let operator_token = parser.advance().clone();
        let right = next(parser)?;
        left = build_binary_expr(left, &operator_token, right)?;
    }

    Ok(left)
}

fn build_binary_expr(left: Node, operator_token: &Token, right: Node) -> Result<Node, Error> {
    let operator = BinaryOperator::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value.clone(),
            },
            operator_token.span.start.clone(),
        )
    })?;

    Ok(Node::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        operator_span: operator_token.span.clone(),
        right: Box::new(right),
    }))
}
