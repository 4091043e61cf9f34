/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type and operator enums
/// - expressions: Expression node payloads
/// - statements: Statement node payloads
pub mod ast;
pub mod expressions;
pub mod statements;
