//! Signatures and the pieces they are made of.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I32,
    I64,
    F32,
    F64,
}

impl ValueType {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::I32 => Some(ValueType::I32),
            TokenKind::I64 => Some(ValueType::I64),
            TokenKind::F32 => Some(ValueType::F32),
            TokenKind::F64 => Some(ValueType::F64),
            _ => None,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
        }
    }
}

/// A function signature: a reference to a declared type, or an explicit
/// parameter and result list. An empty explicit signature is valid.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncSig {
    TypeRef(Variable),
    Explicit {
        params: Vec<Param>,
        results: Vec<ValueType>,
    },
}

impl FuncSig {
    pub fn empty() -> Self {
        FuncSig::Explicit {
            params: vec![],
            results: vec![],
        }
    }
}

/// One `( param ... )` clause. A name binds exactly one type; unnamed
/// clauses may list any number of types.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Named { name: String, value_type: ValueType },
    Unnamed(Vec<ValueType>),
}

impl Param {
    pub fn name(&self) -> Option<&str> {
        match self {
            Param::Named { name, .. } => Some(name),
            Param::Unnamed(_) => None,
        }
    }

    pub fn types(&self) -> &[ValueType] {
        match self {
            Param::Named { value_type, .. } => std::slice::from_ref(value_type),
            Param::Unnamed(types) => types,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub name: Option<String>,
    pub value_type: ValueType,
}

/// Reference to an earlier declaration. Resolution happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variable {
    Index(u32),
    Name(String),
}
