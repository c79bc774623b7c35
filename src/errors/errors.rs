use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedCharacter { .. }
                | ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnexpectedNameCharacter { .. }
                | ErrorImpl::UnexpectedNumberCharacter { .. }
                | ErrorImpl::IllegalEscape { .. }
                | ErrorImpl::IllegalControlCharacter { .. }
                | ErrorImpl::UnclosedString
                | ErrorImpl::MalformedDelimiter { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedNameCharacter { .. } => "UnexpectedNameCharacter",
            ErrorImpl::UnexpectedNumberCharacter { .. } => "UnexpectedNumberCharacter",
            ErrorImpl::IllegalEscape { .. } => "IllegalEscape",
            ErrorImpl::IllegalControlCharacter { .. } => "IllegalControlCharacter",
            ErrorImpl::UnclosedString => "UnclosedString",
            ErrorImpl::MalformedDelimiter { .. } => "MalformedDelimiter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof { .. } => "UnexpectedEof",
            ErrorImpl::MalformedModule { .. } => "MalformedModule",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MalformedString { .. } => "MalformedString",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a keyword, did you mean `${}`?",
                token, token
            )),
            ErrorImpl::UnexpectedNameCharacter { .. } => ErrorTip::Suggestion(String::from(
                "a name needs at least one character after `$`",
            )),
            ErrorImpl::UnexpectedNumberCharacter { .. } => ErrorTip::None,
            ErrorImpl::IllegalEscape { .. } => ErrorTip::Suggestion(String::from(
                "valid escapes are \\n, \\t, \\\\, \\', \\\" and \\hh",
            )),
            ErrorImpl::IllegalControlCharacter { .. } => ErrorTip::Suggestion(String::from(
                "write control characters as \\hh escapes",
            )),
            ErrorImpl::UnclosedString => ErrorTip::Suggestion(String::from(
                "string literals cannot span multiple lines",
            )),
            ErrorImpl::MalformedDelimiter { .. } => ErrorTip::Suggestion(String::from(
                "separate literals with whitespace or a parenthesis",
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected one of {}, found `{}`",
                format_kinds(expected),
                found
            )),
            ErrorImpl::UnexpectedEof { expected } => ErrorTip::Suggestion(format!(
                "expected one of {}, is a parenthesis missing?",
                format_kinds(expected)
            )),
            ErrorImpl::MalformedModule { token } => {
                ErrorTip::Suggestion(format!("Unexpected module field: `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid index: `{}`, indices are non-negative decimal integers",
                token
            )),
            ErrorImpl::MalformedString { .. } => ErrorTip::Suggestion(String::from(
                "byte escapes must decode to valid UTF-8",
            )),
            ErrorImpl::TrailingTokens { token } => {
                ErrorTip::Suggestion(format!("Unexpected `{}` after the module", token))
            }
        }
    }
}

fn format_kinds(kinds: &[TokenKind]) -> String {
    format!(
        "[{}]",
        kinds
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Renders a character the way diagnostics quote it, e.g. `U+0040 '@'`.
pub fn describe_char(ch: Option<char>) -> String {
    match ch {
        Some(ch) => format!("U+{:04X} {:?}", ch as u32, ch),
        None => String::from("EOF"),
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
    // Lexical
    #[error("unexpected character: {character}")]
    UnexpectedCharacter { character: String },
    #[error("unexpected token: {token}")]
    UnrecognisedToken { token: String },
    #[error("unexpected character in name literal: {character}")]
    UnexpectedNameCharacter { character: String },
    #[error("unexpected character in number literal: {character}")]
    UnexpectedNumberCharacter { character: String },
    #[error("illegal escape in string literal: {character}")]
    IllegalEscape { character: String },
    #[error("illegal control character in string literal: {character}")]
    IllegalControlCharacter { character: String },
    #[error("unclosed string literal")]
    UnclosedString,
    #[error("unexpected character {character}, expected one of space/newline/tab/paren")]
    MalformedDelimiter { character: String },

    // Syntactic
    #[error("expected one of {expected:?}, found {found}")]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: String,
    },
    #[error("expected one of {expected:?}, found end of input")]
    UnexpectedEof { expected: Vec<TokenKind> },
    #[error("malformed module: {token}")]
    MalformedModule { token: String },
    #[error("malformed variable reference: {token:?}")]
    NumberParseError { token: String },
    #[error("malformed string literal: {token}")]
    MalformedString { token: String },
    #[error("unexpected {token} after the end of the module")]
    TrailingTokens { token: String },
}
