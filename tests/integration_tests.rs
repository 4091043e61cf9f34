//! Integration tests for end-to-end interpretation.
//!
//! These tests run complete programs through tokenization, parsing and
//! evaluation, capturing printed output in memory.

use blocklang::{
    errors::errors::{Error, ErrorCategory},
    format_error, interpret,
};

/// Runs `source` and returns everything it printed, or the first error.
fn run(source: &str) -> Result<String, Error> {
    let execution = interpret(source.to_string(), Some("test.bl".to_string()), Vec::new())?;
    Ok(String::from_utf8(execution.into_output()).unwrap())
}

/// Runs `source`, returning the output produced before it failed.
fn run_until_error(source: &str) -> (String, Error) {
    let mut output = Vec::new();
    let error = match interpret(source.to_string(), Some("test.bl".to_string()), &mut output) {
        Ok(_) => panic!("program was expected to fail"),
        Err(error) => error,
    };

    (String::from_utf8(output).unwrap(), error)
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(run("print(2 + 3 * 4);").unwrap(), "14\n");
    assert_eq!(run("print((2 + 3) * 4);").unwrap(), "20\n");
    assert_eq!(run("print(10 - 4 - 3);").unwrap(), "3\n");
    assert_eq!(run("print(2 ^ 3 ^ 2);").unwrap(), "512\n");
}

#[test]
fn test_non_integral_output() {
    assert_eq!(run("print(7 / 2);").unwrap(), "3.5\n");
    assert_eq!(run("print(1 / 3);").unwrap(), "0.333333\n");
}

#[test]
fn test_chained_comparison_is_a_syntax_error() {
    let error = run("print(1 < 2 < 3);").unwrap_err();
    assert_eq!(error.get_category(), ErrorCategory::Syntax);
}

#[test]
fn test_short_circuit_skips_side_effects() {
    let source = "var x = 0;\nvar a = 0 && (x = 1);\nvar b = 1 || (x = 2);\nprint(x);";
    assert_eq!(run(source).unwrap(), "0\n");
}

#[test]
fn test_logical_results_are_normalized() {
    assert_eq!(run("print(5 && 3); print(0 || 7); print(!4);").unwrap(), "1\n1\n0\n");
}

#[test]
fn test_shadowing_restores_outer_value() {
    let source = "var x = 1;\n{ var x = 2; print(x); }\nprint(x);";
    assert_eq!(run(source).unwrap(), "2\n1\n");
}

#[test]
fn test_inner_block_updates_outer_variable() {
    let execution = interpret(
        "var total = 0; { total = total + 5; { total = total * 2; } }".to_string(),
        None,
        Vec::new(),
    )
    .unwrap();

    assert_eq!(execution.get_global("total"), Some(10.0));
}

#[test]
fn test_block_locals_are_not_globals() {
    let execution = interpret("var a = 1; { var b = 2; }".to_string(), None, Vec::new()).unwrap();

    assert_eq!(execution.get_global("a"), Some(1.0));
    assert_eq!(execution.get_global("b"), None);
}

#[test]
fn test_redeclaration_in_same_scope() {
    let error = run("var x = 1;\nvar x = 2;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Redeclaration);
    assert_eq!(
        format_error(&error),
        "Error at line 2 (RedeclarationError): VariableAlreadyDeclared (Variable `x` already declared)"
    );
}

#[test]
fn test_undefined_variable_is_caught_before_execution() {
    let (output, error) = run_until_error("print(1);\nif (0) { print(y); }");

    // nothing runs when the program fails to parse
    assert_eq!(output, "");
    assert_eq!(
        format_error(&error),
        "Error at line 2 (UndefinedVariableError): VariableNotDeclared (Variable `y` not declared)"
    );
}

#[test]
fn test_interpolation_reads_live_values() {
    let source = "var i = 0;\nwhile (i < 3) { print(\"i is {i}\"); i = i + 1; }";
    assert_eq!(run(source).unwrap(), "i is 0\ni is 1\ni is 2\n");
}

#[test]
fn test_interpolation_of_fraction() {
    let source = "var half = 1 / 2; print(\"half = {half}\");";
    assert_eq!(run(source).unwrap(), "half = 0.5\n");
}

#[test]
fn test_escape_sequences_in_print() {
    assert_eq!(run("print(\"a\\tb\");").unwrap(), "a\tb\n");
}

#[test]
fn test_loop_terminates() {
    let source = "var n = 10; var steps = 0;\nwhile (n > 0) { n = n - 3; steps = steps + 1; }\nprint(steps);";
    assert_eq!(run(source).unwrap(), "4\n");
}

#[test]
fn test_while_false_never_runs() {
    assert_eq!(run("while (0) print(1); print(2);").unwrap(), "2\n");
}

#[test]
fn test_factorial_program() {
    let source = r#"
        // compute 6!
        var n = 6;
        var result = 1;
        while (n > 1) {
            result = result * n;
            n = n - 1;
        }
        print("6! = {result}");
    "#;

    assert_eq!(run(source).unwrap(), "6! = 720\n");
}

#[test]
fn test_fizzbuzz_with_modulo() {
    let source = r#"
        var i = 1;
        while (i <= 5) {
            if (i % 3 == 0) print("Fizz");
            else if (i % 5 == 0) print("Buzz");
            else print(i);
            i = i + 1;
        }
    "#;

    assert_eq!(run(source).unwrap(), "1\n2\nFizz\n4\nBuzz\n");
}

#[test]
fn test_division_by_zero_stops_execution() {
    let (output, error) = run_until_error("print(1);\nvar z = 0;\nprint(5 / z);\nprint(2);");

    assert_eq!(output, "1\n");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert_eq!(
        format_error(&error),
        "Error at line 3 (RuntimeError): DivisionByZero (Division by zero)"
    );
}

#[test]
fn test_missing_semicolon_diagnostic() {
    let error = run("var x = 1\nprint(x);").unwrap_err();

    assert_eq!(
        format_error(&error),
        "Error at line 2 (SyntaxError): ExpectedToken (Expected `Semicolon`, found `print`)"
    );
}

#[test]
fn test_unrecognised_character() {
    let error = run("var x = 1;\nx = x # 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        format_error(&error),
        "Error at line 2 (SyntaxError): UnrecognisedToken"
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(run("").unwrap(), "");
    assert_eq!(run("// only a comment\n").unwrap(), "");
}

#[test]
fn test_large_values_print_in_exponent_form() {
    let source = "var n = 1000000;\nprint(n);\nprint(\"n = {n}\");\nprint(0.00001234);";
    assert_eq!(run(source).unwrap(), "1e+06\nn = 1000000\n1.234e-05\n");
}

#[test]
fn test_bare_expression_statement_is_rejected() {
    let (output, error) = run_until_error("var x = 1;\nprint(x);\nx + 1;");

    assert_eq!(output, "");
    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert_eq!(error.get_position().line, 3);
}
