use std::collections::HashMap;

use crate::{
    ast::ast::{Func, TypeDef},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{module::*, parser::Parser};

/// A parsed module field, routed to the matching list of the module.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleField {
    Type(TypeDef),
    Func(Func),
}

pub type FieldHandler = fn(&mut Parser) -> Result<ModuleField, Error>;

pub fn create_field_lookups(parser: &mut Parser) {
    parser.field(TokenKind::Type, parse_type_field);
    parser.field(TokenKind::Func, parse_func_field);
}

// Lookup table inside parser struct, so it's easier
pub type FieldLookup = HashMap<TokenKind, FieldHandler>;
