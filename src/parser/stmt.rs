use log::trace;

use crate::{
    ast::{
        ast::Node,
        expressions::{AssignmentExpr, VariableExpr},
        statements::{BlockStmt, IfStmt, PrintStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_assignment_expr, parse_expr, parse_string_literal},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(handler) = handler {
        return handler(parser);
    }

    Err(Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a statement"),
        },
        parser.get_position(),
    ))
}

/// `name = expr;`, the only statement that may start with an identifier.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Node, Error> {
    if parser.peek_token_kind() != TokenKind::Assignment {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `=` after a variable at the start of a statement"),
            },
            parser.get_position(),
        ));
    }

    let assignment = parse_assignment_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(assignment)
}

/// `var name;` or `var name = expr;`
///
/// The name is bound only after its initializer is parsed, so the initializer
/// still sees any outer variable of the same name.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().span.start.clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    if parser.symbols().has_in_current_scope(&name_token.value) {
        return Err(Error::new(
            ErrorImpl::VariableAlreadyDeclared {
                variable: name_token.value.clone(),
            },
            name_token.span.start.clone(),
        ));
    }

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    let id = parser
        .symbols_mut()
        .declare(&name_token.value, name_token.span.start.clone())?;

    Ok(Node::Assignment(AssignmentExpr {
        target: VariableExpr {
            id,
            name: name_token.value,
            span: name_token.span,
        },
        value: assigned_value,
        span: Span { start, end },
    }))
}

/// `print(expr);`, or `print("text {name}");` for interpolated output.
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;

    let value = if parser.current_token_kind() == TokenKind::String
        && parser.peek_token_kind() == TokenKind::CloseParen
    {
        parse_string_literal(parser)?
    } else {
        parse_expr(parser)?
    };

    parser.expect(TokenKind::CloseParen)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Node::Print(PrintStmt {
        value: Box::new(value),
        span: Span { start, end },
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    let end = else_body
        .as_ref()
        .map_or_else(|| then_body.get_span().end.clone(), |body| body.get_span().end.clone());

    Ok(Node::If(IfStmt {
        condition: Box::new(condition),
        then_body: Box::new(then_body),
        else_body,
        span: Span { start, end },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let body = parse_stmt(parser)?;

    Ok(Node::While(WhileStmt {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        condition: Box::new(condition),
        body: Box::new(body),
    }))
}

/// `{ ... }`. The block's scope is open exactly while its statements are
/// being parsed.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    parser.symbols_mut().push_scope();
    trace!("entered block at line {}", start.line);

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        statements.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;
    parser.symbols_mut().pop_scope()?;

    Ok(Node::Block(BlockStmt {
        body: statements,
        span: Span { start, end },
    }))
}

/// `( expr )` after `if` or `while`.
fn parse_condition(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}
