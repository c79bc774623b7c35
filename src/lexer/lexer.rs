use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{describe_char, Error, ErrorImpl},
    Position, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref ATOM_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9_]*").unwrap();
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9\+\-\*/\\\^\~=<>!\?@\#\$%\&\|:`\.'_]+").unwrap();
    // No inf/nan forms and no `p` exponents for hex floats.
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:0[xX][0-9a-fA-F]*(?:\.[0-9a-fA-F]*)?|[0-9]*(?:\.[0-9]*)?)(?:[eE][+-]?[0-9]*)?"
    )
    .unwrap();
}

/// States of the scanner. Each state function returns the next state, or
/// `None` once the input is exhausted or an error token has been pushed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Any,
    Atom,
    Name,
    String,
    Number,
    RightDelim,
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Read cursor
    pos: usize,
    /// Start of the pending token
    start: usize,
    /// Byte length of the last read character, zero once unread
    last_size: usize,
    file: Rc<String>,
    error: Option<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            start: 0,
            last_size: 0,
            file: file_name,
            error: None,
        }
    }

    /// Runs the scanner to completion.
    ///
    /// On the first malformed construct the token list ends with a single
    /// [`TokenKind::Error`] token and the matching error is returned beside it.
    pub fn lex(mut self) -> (Vec<Token>, Option<Error>) {
        let mut state = Some(State::Any);

        while let Some(current) = state {
            state = match current {
                State::Any => lex_any(&mut self),
                State::Atom => lex_atom(&mut self),
                State::Name => lex_name(&mut self),
                State::String => lex_string(&mut self),
                State::Number => lex_number(&mut self),
                State::RightDelim => lex_right_delim(&mut self),
            };
        }

        (self.tokens, self.error)
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn read(&mut self) -> Option<char> {
        match self.remainder().chars().next() {
            Some(ch) => {
                self.last_size = ch.len_utf8();
                self.pos += self.last_size;
                Some(ch)
            }
            None => {
                self.last_size = 0;
                None
            }
        }
    }

    /// Steps back over the last read character. Only one level of pushback
    /// exists; a second call, or a call after reading EOF, does nothing.
    pub fn unread(&mut self) {
        self.pos -= self.last_size;
        self.last_size = 0;
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn accept(&mut self, valid: &str) -> bool {
        match self.read() {
            Some(ch) if valid.contains(ch) => true,
            _ => {
                self.unread();
                false
            }
        }
    }

    fn accept_hex_digit(&mut self) -> bool {
        match self.read() {
            Some(ch) if ch.is_ascii_hexdigit() => true,
            _ => {
                self.unread();
                false
            }
        }
    }

    /// Skips a run of characters from `valid` and drops the pending input.
    pub fn discard_run(&mut self, valid: &str) {
        while self.accept(valid) {}
        self.ignore();
    }

    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.last_size = 0;
    }

    /// Moves the cursor past `pattern` if it matches at the cursor,
    /// returning the match length.
    fn advance_match(&mut self, pattern: &Regex) -> Option<usize> {
        let matched = pattern.find(self.remainder())?.end();
        self.pos += matched;
        self.last_size = 0;
        Some(matched)
    }

    pub fn pending(&self) -> &str {
        &self.source[self.start..self.pos]
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn emit(&mut self, kind: TokenKind) {
        let value = String::from(self.pending());
        self.push_at(kind, value, self.start, self.pos);
        self.ignore();
    }

    fn push_at(&mut self, kind: TokenKind, value: String, start: usize, end: usize) {
        let span = MK_SPAN!(start, end, self.file);
        self.tokens.push(MK_TOKEN!(kind, value, span));
    }

    /// Terminates the token stream with an error token.
    fn error(&mut self, error_impl: ErrorImpl) -> Option<State> {
        let error = Error::new(error_impl, Position(self.pos as u32, Rc::clone(&self.file)));
        self.push_at(TokenKind::Error, error.to_string(), self.pos, self.pos);
        self.error = Some(error);
        None
    }
}

fn lex_any(lexer: &mut Lexer) -> Option<State> {
    lexer.discard_run(" \t");

    let kind = match lexer.read()? {
        'a'..='z' | 'A'..='Z' => return Some(State::Atom),
        '$' => return Some(State::Name),
        '"' => return Some(State::String),
        '+' | '-' | '0'..='9' => {
            lexer.unread();
            return Some(State::Number);
        }
        '\n' => {
            lexer.ignore();
            return Some(State::Any);
        }
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '_' => TokenKind::Underscore,
        '=' => TokenKind::Equal,
        '/' => TokenKind::Slash,
        '.' => TokenKind::Dot,
        ch => {
            lexer.unread();
            return lexer.error(ErrorImpl::UnexpectedCharacter {
                character: describe_char(Some(ch)),
            })
        }
    };

    lexer.emit(kind);
    Some(State::Any)
}

/// Scans an atom, the first letter having been read.
///
/// A run ending in `_s` or `_u` whose prefix is a keyword splits into the
/// keyword, an underscore and the sign, so `trunc_s` lexes as three tokens.
fn lex_atom(lexer: &mut Lexer) -> Option<State> {
    lexer.advance_match(&ATOM_PATTERN);
    let atom = String::from(lexer.pending());

    let signed = atom
        .strip_suffix("_s")
        .map(|prefix| (prefix, TokenKind::S, "s"))
        .or_else(|| atom.strip_suffix("_u").map(|prefix| (prefix, TokenKind::U, "u")));

    match signed {
        Some((prefix, sign_kind, sign)) => {
            if let Some(kind) = RESERVED_LOOKUP.get(prefix) {
                let keyword_end = lexer.start + prefix.len();
                lexer.push_at(*kind, String::from(prefix), lexer.start, keyword_end);
                lexer.push_at(
                    TokenKind::Underscore,
                    String::from("_"),
                    keyword_end,
                    keyword_end + 1,
                );
                lexer.push_at(sign_kind, String::from(sign), keyword_end + 1, lexer.pos);
                lexer.ignore();
                return Some(State::Any);
            }
        }
        None => {
            if let Some(kind) = RESERVED_LOOKUP.get(atom.as_str()) {
                lexer.emit(*kind);
                return Some(State::Any);
            }
        }
    }

    lexer.pos = lexer.start;
    lexer.error(ErrorImpl::UnrecognisedToken { token: atom })
}

/// Scans a name literal, the `$` having been read.
fn lex_name(lexer: &mut Lexer) -> Option<State> {
    if lexer.advance_match(&NAME_PATTERN).is_none() {
        return lexer.error(ErrorImpl::UnexpectedNameCharacter {
            character: describe_char(lexer.peek()),
        });
    }

    lexer.emit(TokenKind::Name);
    Some(State::RightDelim)
}

/// Scans a string literal, the opening quote having been read.
fn lex_string(lexer: &mut Lexer) -> Option<State> {
    loop {
        match lexer.read() {
            Some('"') => {
                lexer.emit(TokenKind::String);
                return Some(State::RightDelim);
            }
            Some('\\') => {
                if lexer.accept("nt\\'\"") {
                    continue;
                }
                if lexer.accept_hex_digit() && lexer.accept_hex_digit() {
                    continue;
                }
                return lexer.error(ErrorImpl::IllegalEscape {
                    character: describe_char(lexer.peek()),
                });
            }
            Some('\n') | None => return lexer.error(ErrorImpl::UnclosedString),
            Some(ch) if ch <= '\u{1f}' || ch == '\u{7f}' => {
                return lexer.error(ErrorImpl::IllegalControlCharacter {
                    character: describe_char(Some(ch)),
                })
            }
            Some(_) => {}
        }
    }
}

/// Scans a number literal, the leading sign or digit having been pushed back.
///
/// The scan is permissive: the text is kept verbatim and only checked for
/// running into an alphanumeric character.
fn lex_number(lexer: &mut Lexer) -> Option<State> {
    lexer.advance_match(&NUMBER_PATTERN);

    if let Some(ch) = lexer.peek() {
        if ch == '_' || ch.is_alphanumeric() {
            return lexer.error(ErrorImpl::UnexpectedNumberCharacter {
                character: describe_char(Some(ch)),
            });
        }
    }

    lexer.emit(TokenKind::Number);
    Some(State::RightDelim)
}

fn lex_right_delim(lexer: &mut Lexer) -> Option<State> {
    match lexer.peek() {
        None | Some(' ' | '\n' | '\t' | '(' | ')') => Some(State::Any),
        ch => lexer.error(ErrorImpl::MalformedDelimiter {
            character: describe_char(ch),
        }),
    }
}

/// Decodes the contents of a string literal token, quotes included.
///
/// Returns `None` when the literal is not quoted, carries a broken escape,
/// or its byte escapes do not form valid UTF-8.
pub fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buffer = [0; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buffer).as_bytes());
            continue;
        }

        match chars.next()? {
            'n' => bytes.push(b'\n'),
            't' => bytes.push(b'\t'),
            '\\' => bytes.push(b'\\'),
            '\'' => bytes.push(b'\''),
            '"' => bytes.push(b'"'),
            high => {
                let low = chars.next()?;
                let high = high.to_digit(16)?;
                let low = low.to_digit(16)?;
                bytes.push((high * 16 + low) as u8);
            }
        }
    }

    String::from_utf8(bytes).ok()
}

/// Lexes `source` and turns a terminating error token into an `Err`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let lexer = Lexer::new(String::from(source), file);

    match lexer.lex() {
        (_, Some(error)) => Err(error),
        (tokens, None) => Ok(tokens),
    }
}
