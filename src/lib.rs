#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses `source` in one go.
///
/// `file` only names the input in positions and diagnostics.
pub fn parse_module(source: &str, file: Option<String>) -> Result<Module, Error> {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let tokens = lexer::lexer::tokenize(source, Some(file_name.to_string()))?;
    parser::parser::parse(tokens, file_name)
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the input
/// resolves to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (end == source.len() && pos == end) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Empty input, or an offset just past a trailing newline.
    Some((line_number, String::new(), 0))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected one of [RParen], found `(`)
        -> module.wat
           |
        20 | (func (local $x i32) (local $y i32))
           | ---------------------^
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "(module\n  (func $f)\n)\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 3).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "(module\n");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 14).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  (func $f)\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let source = "(module";
        let (line_number, _, line_pos) = super::get_line_at_position(source, 7).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 7);

        assert!(super::get_line_at_position(source, 8).is_none());
    }

    #[test]
    fn test_render_error() {
        let source = "(module\n  (memory))";
        let error = Error::new(
            ErrorImpl::MalformedModule {
                token: String::from("LParen(()"),
            },
            Position(10, Rc::new(String::from("test.wat"))),
        );

        let rendered = super::render_error(&error, source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: MalformedModule (Unexpected module field: `LParen(()`)");
        assert_eq!(lines[1], "-> test.wat");
        assert_eq!(lines[3], "2 | (memory))");
        assert_eq!(lines[4], "  | ^");
    }

    #[test]
    fn test_parse_module_reports_file_name() {
        let error = super::parse_module("(module", Some(String::from("broken.wat"))).unwrap_err();
        assert_eq!(error.get_position().1.as_str(), "broken.wat");
    }
}
