//! Signature, parameter, result, local and variable productions.

use crate::{
    ast::types::{FuncSig, Local, Param, ValueType, Variable},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Parses a funcsig:
///
/// ```text
/// ( type <var> ) | <param>* <result>*
/// ```
///
/// With neither form present the signature is empty.
pub fn parse_func_sig(parser: &mut Parser) -> Result<FuncSig, Error> {
    if parser.match_kinds(&[TokenKind::LParen, TokenKind::Type]) {
        let var = parse_variable(parser)?;
        parser.expect(TokenKind::RParen)?;
        return Ok(FuncSig::TypeRef(var));
    }

    let params = parse_param_list(parser)?;
    let results = parse_result_list(parser)?;

    Ok(FuncSig::Explicit { params, results })
}

pub fn parse_param_list(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut params = vec![];

    while parser.match_kinds(&[TokenKind::LParen, TokenKind::Param]) {
        params.push(parse_param(parser)?);
    }

    Ok(params)
}

/// Parses a param, `( param` having been read:
///
/// ```text
/// ( param <type>* ) | ( param <name> <type> )
/// ```
pub fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    if let Some(name) = parser.accept(&[TokenKind::Name]) {
        let value_type = parser.expect_value_type()?;
        parser.expect(TokenKind::RParen)?;

        return Ok(Param::Named {
            name: extract_name(&name),
            value_type,
        });
    }

    let types = parse_value_types(parser);
    parser.expect(TokenKind::RParen)?;

    Ok(Param::Unnamed(types))
}

/// Parses results, one type per clause:
///
/// ```text
/// ( result <type> )*
/// ```
pub fn parse_result_list(parser: &mut Parser) -> Result<Vec<ValueType>, Error> {
    let mut results = vec![];

    while parser.match_kinds(&[TokenKind::LParen, TokenKind::Result]) {
        results.push(parser.expect_value_type()?);
        parser.expect(TokenKind::RParen)?;
    }

    Ok(results)
}

/// Parses locals:
///
/// ```text
/// ( local <type>* ) | ( local <name> <type> )
/// ```
///
/// A named local ends the list: it is returned on its own and neither the
/// locals before it nor any clause after it are collected. Clauses left
/// behind surface as an error at the enclosing function's closing paren.
pub fn parse_local_list(parser: &mut Parser) -> Result<Vec<Local>, Error> {
    let mut locals = vec![];

    while parser.match_kinds(&[TokenKind::LParen, TokenKind::Local]) {
        if let Some(name) = parser.accept(&[TokenKind::Name]) {
            let value_type = parser.expect_value_type()?;
            parser.expect(TokenKind::RParen)?;

            return Ok(vec![Local {
                name: Some(extract_name(&name)),
                value_type,
            }]);
        }

        locals.extend(
            parse_value_types(parser)
                .into_iter()
                .map(|value_type| Local {
                    name: None,
                    value_type,
                }),
        );
        parser.expect(TokenKind::RParen)?;
    }

    Ok(locals)
}

/// Parses a var:
///
/// ```text
/// <name> | <number>
/// ```
///
/// Numbers must be non-negative decimal integers that fit an index.
pub fn parse_variable(parser: &mut Parser) -> Result<Variable, Error> {
    let token = parser.expect_one_of(&[TokenKind::Name, TokenKind::Number])?;

    if token.kind == TokenKind::Name {
        return Ok(Variable::Name(extract_name(&token)));
    }

    // `str::parse` would take a leading `+`; indices are plain digits.
    if !token.value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(number_error(&token));
    }

    token
        .value
        .parse::<u32>()
        .map(Variable::Index)
        .map_err(|_| number_error(&token))
}

pub fn parse_optional_name(parser: &mut Parser) -> Option<String> {
    parser
        .accept(&[TokenKind::Name])
        .map(|token| extract_name(&token))
}

fn parse_value_types(parser: &mut Parser) -> Vec<ValueType> {
    let mut types = vec![];

    while let Some(value_type) = parser.accept_value_type() {
        types.push(value_type);
    }

    types
}

fn extract_name(token: &Token) -> String {
    token
        .value
        .strip_prefix('$')
        .unwrap_or(&token.value)
        .to_string()
}

fn number_error(token: &Token) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    )
}
