//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntactic phases
//! - Helpful error messages and suggestions

pub mod errors;
