use crate::{ast::ast::Instruction, errors::errors::Error};

use super::parser::Parser;

/// Parses one instruction.
///
/// Instruction bodies are not supported yet: this consumes nothing and
/// always reports that no instruction is present.
pub fn parse_instruction(_parser: &mut Parser) -> Result<Option<Instruction>, Error> {
    Ok(None)
}

pub fn parse_instruction_list(parser: &mut Parser) -> Result<Vec<Instruction>, Error> {
    let mut instructions = vec![];

    while let Some(instruction) = parse_instruction(parser)? {
        instructions.push(instruction);
    }

    Ok(instructions)
}
