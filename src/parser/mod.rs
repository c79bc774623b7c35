//! Parser module for building the module tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! token buffer into a [`Module`](crate::ast::ast::Module). It handles:
//!
//! - Module fields (type definitions and functions)
//! - Function signatures, parameters, results and locals
//! - Inline export and import clauses
//! - Error reporting with the offending token and what was expected
//!
//! Module fields are dispatched through a lookup table keyed by the
//! keyword that follows the opening parenthesis.

pub mod instr;
pub mod lookups;
pub mod module;
pub mod parser;
pub mod sig;
