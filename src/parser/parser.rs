//! Parser implementation for building the module tree.
//!
//! This module contains the main Parser struct and its token cursor. The
//! cursor is an index into a fully materialized token buffer, so a failed
//! multi-token match rewinds by exactly the number of tokens it consumed.
//!
//! It maintains a lookup table from the keyword following `(` at module
//! level to the handler parsing that module field.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{ast::Module, types::ValueType},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_field_lookups, FieldHandler, FieldLookup},
    module::parse_module,
};

pub const VALUE_TYPES: [TokenKind; 4] = [
    TokenKind::F32,
    TokenKind::F64,
    TokenKind::I32,
    TokenKind::I64,
];

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token buffer
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for module field handlers
    field_lookup: FieldLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            field_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `None` past the end.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.nth_token_kind(0)
    }

    /// Returns the kind of the token `n` places ahead of the cursor.
    pub fn nth_token_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Moves the cursor back by `n` tokens.
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Consumes the exact sequence `kinds`, or nothing at all.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for (consumed, kind) in kinds.iter().enumerate() {
            if self.current_token_kind() != Some(*kind) {
                self.rewind(consumed);
                return false;
            }
            self.pos += 1;
        }

        true
    }

    /// Consumes one token if its kind is one of `kinds`.
    pub fn accept(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let token = self.current_token()?;
        if !kinds.contains(&token.kind) {
            return None;
        }

        let token = token.clone();
        self.pos += 1;
        Some(token)
    }

    /// Consumes one token of one of `kinds`, failing otherwise.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<Token, Error> {
        match self.accept(kinds) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kinds)),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind])
    }

    pub fn accept_value_type(&mut self) -> Option<ValueType> {
        let value_type = ValueType::from_token_kind(self.current_token_kind()?)?;
        self.pos += 1;
        Some(value_type)
    }

    pub fn expect_value_type(&mut self) -> Result<ValueType, Error> {
        match self.accept_value_type() {
            Some(value_type) => Ok(value_type),
            None => Err(self.unexpected(&VALUE_TYPES)),
        }
    }

    /// Builds the error for finding something other than `expected` at the
    /// cursor.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let error = match self.current_token() {
            Some(token) => ErrorImpl::UnexpectedToken {
                expected: expected.to_vec(),
                found: token.to_string(),
            },
            None => ErrorImpl::UnexpectedEof {
                expected: expected.to_vec(),
            },
        };

        Error::new(error, self.get_position())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns a reference to the module field lookup table.
    pub fn get_field_lookup(&self) -> &FieldLookup {
        &self.field_lookup
    }

    /// Registers the handler for a module field introduced by `( kind`.
    pub fn field(&mut self, kind: TokenKind, field_fn: FieldHandler) {
        self.field_lookup.insert(kind, field_fn);
    }

    /// Returns the source position of the current token, or the end of the
    /// last token once the buffer is exhausted.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}

/// Parses a token buffer into a Module.
///
/// This is the main entry point for parsing. The buffer must hold exactly
/// one module; anything after its closing parenthesis is an error.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, as produced by a successful lex
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Module, Error> {
    let mut parser = Parser::new(tokens, file);
    create_field_lookups(&mut parser);

    let module = parse_module(&mut parser)?;

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: token.to_string(),
            },
            parser.get_position(),
        ));
    }

    Ok(module)
}
