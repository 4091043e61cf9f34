#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc};

use log::info;

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::Evaluator,
    lexer::lexer::tokenize,
    parser::parser::parse,
    symbol_table::scope::Scope,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol_table;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position {
    /// Byte offset into the source
    pub offset: u32,
    /// 1-based source line, 0 when unknown
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A finished run: the evaluator (with its output sink and variable state)
/// plus the global names that were still reachable when parsing ended.
pub struct Execution<W: Write> {
    pub globals: Scope,
    pub evaluator: Evaluator<W>,
}

impl<W: Write> Execution<W> {
    /// Current value of a global variable, looked up by name.
    pub fn get_global(&self, name: &str) -> Option<f64> {
        let id = self.globals.get(name)?;
        self.evaluator.registry().read(id, &Position::null()).ok()
    }

    pub fn into_output(self) -> W {
        self.evaluator.into_output()
    }
}

/// Runs the whole pipeline: tokenize, parse every statement, then execute.
///
/// Nothing is executed unless the whole program parses.
pub fn interpret<W: Write>(
    source: String,
    file: Option<String>,
    output: W,
) -> Result<Execution<W>, Error> {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source, Some(file_name.to_string()))?;
    info!("tokenized {} tokens from {}", tokens.len(), file_name);

    let program = parse(tokens, Rc::clone(&file_name))?;
    info!(
        "parsed {} top-level statements, {} variables",
        program.body.body.len(),
        program.registry.len()
    );

    let mut evaluator = Evaluator::new(program.registry, output);
    evaluator.run(&program.body)?;
    info!("execution of {} finished", file_name);

    Ok(Execution {
        globals: program.globals,
        evaluator,
    })
}

/// Returns the 1-based line number, the text of that line and the column of
/// `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Formats an error as the single diagnostic line printed before exiting.
pub fn format_error(error: &Error) -> String {
    let line = error.get_position().line;

    let location = if line == 0 {
        String::from("Error")
    } else {
        format!("Error at line {}", line)
    };

    if let ErrorTip::None = error.get_tip() {
        format!(
            "{} ({}): {}",
            location,
            error.get_category(),
            error.get_error_name()
        )
    } else {
        format!(
            "{} ({}): {} ({})",
            location,
            error.get_category(),
            error.get_error_name(),
            error.get_tip()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nsecond\n\n    Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);

        assert!(super::get_line_at_position(content, 500).is_none());
    }

    #[test]
    fn test_format_error_with_line() {
        let error = Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: String::from("y"),
            },
            Position::new(12, 3, Rc::new(String::from("test.bl"))),
        );

        assert_eq!(
            super::format_error(&error),
            "Error at line 3 (UndefinedVariableError): VariableNotDeclared (Variable `y` not declared)"
        );
    }

    #[test]
    fn test_format_error_without_line() {
        let error = Error::new(ErrorImpl::ScopeUnderflow, Position::null());

        assert!(super::format_error(&error).starts_with("Error (ScopeUnderflowError): ScopeUnderflow"));
    }
}
