/// AST (Abstract Syntax Tree) module
/// Contains the module tree produced by the parser
///
/// Submodules:
/// - ast: Module, type definitions and functions
/// - types: Signatures, parameters, locals, value types and variables
pub mod ast;
pub mod types;
