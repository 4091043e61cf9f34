use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ChainedComparison { .. } => "ChainedComparison",
            ErrorImpl::UnterminatedInterpolation { .. } => "UnterminatedInterpolation",
            ErrorImpl::EmptyInterpolation { .. } => "EmptyInterpolation",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ModuloByZero => "ModuloByZero",
            ErrorImpl::UnknownIdentity { .. } => "UnknownIdentity",
            ErrorImpl::OutputError { .. } => "OutputError",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
        }
    }

    /// The broad failure class reported to the user.
    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::ChainedComparison { .. }
            | ErrorImpl::UnterminatedInterpolation { .. }
            | ErrorImpl::EmptyInterpolation { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorCategory::Syntax,
            ErrorImpl::VariableAlreadyDeclared { .. } => ErrorCategory::Redeclaration,
            ErrorImpl::VariableNotDeclared { .. } => ErrorCategory::UndefinedVariable,
            ErrorImpl::DivisionByZero
            | ErrorImpl::ModuloByZero
            | ErrorImpl::UnknownIdentity { .. }
            | ErrorImpl::OutputError { .. } => ErrorCategory::Runtime,
            ErrorImpl::ScopeUnderflow => ErrorCategory::ScopeUnderflow,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, received
            )),
            ErrorImpl::ChainedComparison { token } => ErrorTip::Suggestion(format!(
                "Comparison `{}` cannot follow another comparison, add parentheses",
                token
            )),
            ErrorImpl::UnterminatedInterpolation { literal } => ErrorTip::Suggestion(format!(
                "Missing `}}` in interpolated string \"{}\"",
                literal
            )),
            ErrorImpl::EmptyInterpolation { literal } => ErrorTip::Suggestion(format!(
                "`{{}}` in \"{}\" must name a variable",
                literal
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::DivisionByZero => ErrorTip::Suggestion(String::from("Division by zero")),
            ErrorImpl::ModuloByZero => ErrorTip::Suggestion(String::from(
                "Right operand of `%` rounds to zero",
            )),
            ErrorImpl::UnknownIdentity { id } => {
                ErrorTip::Suggestion(format!("No variable slot exists for identity {}", id))
            }
            ErrorImpl::OutputError { message } => {
                ErrorTip::Suggestion(format!("Failed to write output: {}", message))
            }
            ErrorImpl::ScopeUnderflow => ErrorTip::Suggestion(String::from(
                "Attempted to pop the global scope",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.internal_error, self.position.line)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Redeclaration,
    UndefinedVariable,
    Runtime,
    ScopeUnderflow,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Redeclaration => "RedeclarationError",
            ErrorCategory::UndefinedVariable => "UndefinedVariableError",
            ErrorCategory::Runtime => "RuntimeError",
            ErrorCategory::ScopeUnderflow => "ScopeUnderflowError",
        };
        write!(f, "{}", name)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected {expected}, found {received:?}")]
    ExpectedToken { expected: TokenKind, received: String },
    #[error("chained comparison at {token:?}")]
    ChainedComparison { token: String },
    #[error("unterminated interpolation in {literal:?}")]
    UnterminatedInterpolation { literal: String },
    #[error("empty interpolation in {literal:?}")]
    EmptyInterpolation { literal: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("unknown variable identity {id}")]
    UnknownIdentity { id: usize },
    #[error("output error: {message}")]
    OutputError { message: String },
    #[error("scope underflow")]
    ScopeUnderflow,
}
