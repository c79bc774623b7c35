//! Module, type definition and function productions.

use crate::{
    ast::ast::{EmbeddedExport, EmbeddedImport, Func, FuncBody, FuncKind, Module, TypeDef},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::unquote, tokens::TokenKind},
};

use super::{
    instr::parse_instruction_list,
    lookups::ModuleField,
    parser::Parser,
    sig::{parse_func_sig, parse_local_list, parse_optional_name},
};

/// Parses a module:
///
/// ```text
/// ( module <name>? <typedef>* <func>* )
/// ```
///
/// Type definitions and functions may be interleaved; each list keeps
/// encounter order.
pub fn parse_module(parser: &mut Parser) -> Result<Module, Error> {
    parser.expect(TokenKind::LParen)?;
    parser.expect(TokenKind::Module)?;

    let mut module = Module {
        name: parse_optional_name(parser),
        ..Default::default()
    };

    loop {
        match parser.current_token_kind() {
            Some(TokenKind::RParen) => {
                parser.advance();
                return Ok(module);
            }
            None => return Err(parser.unexpected(&[TokenKind::LParen, TokenKind::RParen])),
            Some(_) => {}
        }

        let field = parser.nth_token_kind(1).and_then(|kind| {
            parser
                .get_field_lookup()
                .get(&kind)
                .map(|handler| (kind, *handler))
        });

        match field {
            Some((kind, handler)) if parser.match_kinds(&[TokenKind::LParen, kind]) => {
                match handler(parser)? {
                    ModuleField::Type(def) => module.types.push(def),
                    ModuleField::Func(func) => module.funcs.push(func),
                }
            }
            _ => {
                let token = parser
                    .current_token()
                    .map(|token| token.to_string())
                    .unwrap_or_default();

                return Err(Error::new(
                    ErrorImpl::MalformedModule { token },
                    parser.get_position(),
                ));
            }
        }
    }
}

/// Parses a typedef, `( type` having been read:
///
/// ```text
/// ( type <name>? ( func <funcsig> ) )
/// ```
pub fn parse_type_field(parser: &mut Parser) -> Result<ModuleField, Error> {
    let name = parse_optional_name(parser);

    parser.expect(TokenKind::LParen)?;
    parser.expect(TokenKind::Func)?;
    let func = parse_func_sig(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::RParen)?;

    Ok(ModuleField::Type(TypeDef { name, func }))
}

/// Parses a func, `( func` having been read:
///
/// ```text
/// ( func <name>? <funcsig> <local>* <instr>* )
/// ( func <name>? ( export <string> ) <funcsig> <local>* <instr>* )
/// ( func <name>? ( import <string> <string> ) <funcsig> )
/// ```
pub fn parse_func_field(parser: &mut Parser) -> Result<ModuleField, Error> {
    let name = parse_optional_name(parser);

    let mut export = None;
    if parser.match_kinds(&[TokenKind::LParen, TokenKind::Export]) {
        export = Some(EmbeddedExport {
            name: parse_string(parser)?,
        });
        parser.expect(TokenKind::RParen)?;
    } else if parser.match_kinds(&[TokenKind::LParen, TokenKind::Import]) {
        let import = EmbeddedImport {
            module: parse_string(parser)?,
            name: parse_string(parser)?,
        };
        parser.expect(TokenKind::RParen)?;

        let signature = parse_func_sig(parser)?;
        parser.expect(TokenKind::RParen)?;

        return Ok(ModuleField::Func(Func {
            name,
            signature,
            kind: FuncKind::Imported(import),
        }));
    }

    let signature = parse_func_sig(parser)?;
    let locals = parse_local_list(parser)?;
    let instructions = parse_instruction_list(parser)?;
    parser.expect(TokenKind::RParen)?;

    Ok(ModuleField::Func(Func {
        name,
        signature,
        kind: FuncKind::Defined {
            export,
            body: FuncBody {
                locals,
                instructions,
            },
        },
    }))
}

/// Expects a string literal and decodes its contents.
fn parse_string(parser: &mut Parser) -> Result<String, Error> {
    let token = parser.expect(TokenKind::String)?;

    unquote(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::MalformedString {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}
