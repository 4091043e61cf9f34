use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Power,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(TokenKind::And, BindingPower::Logical);
    parser.binary(TokenKind::Or, BindingPower::Logical);

    // Relational
    parser.binary(TokenKind::Equals, BindingPower::Relational);
    parser.binary(TokenKind::NotEquals, BindingPower::Relational);
    parser.binary(TokenKind::Less, BindingPower::Relational);
    parser.binary(TokenKind::LessEquals, BindingPower::Relational);
    parser.binary(TokenKind::Greater, BindingPower::Relational);
    parser.binary(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive, multiplicative and power
    parser.binary(TokenKind::Plus, BindingPower::Additive);
    parser.binary(TokenKind::Dash, BindingPower::Additive);
    parser.binary(TokenKind::Star, BindingPower::Multiplicative);
    parser.binary(TokenKind::Slash, BindingPower::Multiplicative);
    parser.binary(TokenKind::Percent, BindingPower::Multiplicative);
    parser.binary(TokenKind::Caret, BindingPower::Power);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
