//! Lexical analysis for the module text format.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Keywords and compound mnemonics such as `trunc_s`
//! - Name, string and number literals with their delimiter rules
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
