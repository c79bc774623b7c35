use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("i32", TokenKind::I32);
        map.insert("i64", TokenKind::I64);
        map.insert("f32", TokenKind::F32);
        map.insert("f64", TokenKind::F64);

        map.insert("anyfunc", TokenKind::Anyfunc);

        map.insert("clz", TokenKind::Clz);
        map.insert("ctz", TokenKind::Ctz);
        map.insert("eqz", TokenKind::Eqz);
        map.insert("popcnt", TokenKind::Popcnt);

        map.insert("add", TokenKind::Add);
        map.insert("and", TokenKind::And);
        map.insert("div", TokenKind::Div);
        map.insert("mul", TokenKind::Mul);
        map.insert("or", TokenKind::Or);
        map.insert("rem", TokenKind::Rem);
        map.insert("rotl", TokenKind::Rotl);
        map.insert("rotr", TokenKind::Rotr);
        map.insert("shl", TokenKind::Shl);
        map.insert("shr", TokenKind::Shr);
        map.insert("sub", TokenKind::Sub);
        map.insert("xor", TokenKind::Xor);

        map.insert("eq", TokenKind::Eq);
        map.insert("ge", TokenKind::Ge);
        map.insert("gt", TokenKind::Gt);
        map.insert("le", TokenKind::Le);
        map.insert("lt", TokenKind::Lt);
        map.insert("ne", TokenKind::Ne);

        map.insert("convert", TokenKind::Convert);
        map.insert("demote", TokenKind::Demote);
        map.insert("extend", TokenKind::Extend);
        map.insert("promote", TokenKind::Promote);
        map.insert("reinterpret", TokenKind::Reinterpret);
        map.insert("trunc", TokenKind::Trunc);

        map.insert("align", TokenKind::Align);
        map.insert("offset", TokenKind::Offset);
        map.insert("mut", TokenKind::Mut);

        map.insert("block", TokenKind::Block);
        map.insert("if", TokenKind::If);
        map.insert("loop", TokenKind::Loop);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("then", TokenKind::Then);

        map.insert("br_if", TokenKind::BrIf);
        map.insert("br_table", TokenKind::BrTable);
        map.insert("call", TokenKind::Call);
        map.insert("call_indirect", TokenKind::CallIndirect);
        map.insert("const", TokenKind::Const);
        map.insert("current_memory", TokenKind::CurrentMemory);
        map.insert("drop", TokenKind::Drop);
        map.insert("get_global", TokenKind::GetGlobal);
        map.insert("get_local", TokenKind::GetLocal);
        map.insert("grow_memory", TokenKind::GrowMemory);
        map.insert("load", TokenKind::Load);
        map.insert("nop", TokenKind::Nop);
        map.insert("return", TokenKind::Return);
        map.insert("select", TokenKind::Select);
        map.insert("set_global", TokenKind::SetGlobal);
        map.insert("set_local", TokenKind::SetLocal);
        map.insert("store", TokenKind::Store);
        map.insert("tee_local", TokenKind::TeeLocal);
        map.insert("unreachable", TokenKind::Unreachable);

        map.insert("data", TokenKind::Data);
        map.insert("elem", TokenKind::Elem);
        map.insert("export", TokenKind::Export);
        map.insert("func", TokenKind::Func);
        map.insert("global", TokenKind::Global);
        map.insert("import", TokenKind::Import);
        map.insert("local", TokenKind::Local);
        map.insert("memory", TokenKind::Memory);
        map.insert("module", TokenKind::Module);
        map.insert("param", TokenKind::Param);
        map.insert("result", TokenKind::Result);
        map.insert("start", TokenKind::Start);
        map.insert("table", TokenKind::Table);
        map.insert("type", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Error,

    Dot,
    Equal,
    LParen,
    RParen,
    Slash,
    Underscore,

    Name,
    Number,
    String,

    // Value types
    F32,
    F64,
    I32,
    I64,

    // Element types
    Anyfunc,

    // Unary operators
    Clz,
    Ctz,
    Eqz,
    Popcnt,

    // Binary operators
    Add,
    And,
    Div,
    Mul,
    Or,
    Rem,
    Rotl,
    Rotr,
    Shl,
    Shr,
    Sub,
    Xor,

    // Relational operators
    Eq,
    Ge,
    Gt,
    Le,
    Lt,
    Ne,

    // Signs
    S,
    U,

    // Conversion operators
    Convert,
    Demote,
    Extend,
    Promote,
    Reinterpret,
    Trunc,

    Align,
    Offset,

    Block,
    If,
    Loop,

    Else,
    End,
    Then,

    Mut,

    BrIf,
    BrTable,
    Call,
    CallIndirect,
    Const,
    CurrentMemory,
    Drop,
    GetGlobal,
    GetLocal,
    GrowMemory,
    Load,
    Nop,
    Return,
    Select,
    SetGlobal,
    SetLocal,
    Store,
    TeeLocal,
    Unreachable,

    // Sections
    Data,
    Elem,
    Export,
    Func,
    Global,
    Import,
    Local,
    Memory,
    Module,
    Param,
    Result,
    Start,
    Table,
    Type,
}

/// Coarse grouping of token kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Error,
    Structural,
    Literal,
    ValueType,
    ElemType,
    UnaryOp,
    BinaryOp,
    RelOp,
    Sign,
    ConversionOp,
    MemoryArg,
    BlockInstr,
    Op,
    Keyword,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        use TokenKind::*;

        match self {
            Error => TokenCategory::Error,
            Dot | Equal | LParen | RParen | Slash | Underscore => TokenCategory::Structural,
            Name | Number | String => TokenCategory::Literal,
            F32 | F64 | I32 | I64 => TokenCategory::ValueType,
            Anyfunc => TokenCategory::ElemType,
            Clz | Ctz | Eqz | Popcnt => TokenCategory::UnaryOp,
            Add | And | Div | Mul | Or | Rem | Rotl | Rotr | Shl | Shr | Sub | Xor => {
                TokenCategory::BinaryOp
            }
            Eq | Ge | Gt | Le | Lt | Ne => TokenCategory::RelOp,
            S | U => TokenCategory::Sign,
            Convert | Demote | Extend | Promote | Reinterpret | Trunc => {
                TokenCategory::ConversionOp
            }
            Align | Offset => TokenCategory::MemoryArg,
            Block | If | Loop => TokenCategory::BlockInstr,
            BrIf | BrTable | Call | CallIndirect | Const | CurrentMemory | Drop | GetGlobal
            | GetLocal | GrowMemory | Load | Nop | Return | Select | SetGlobal | SetLocal
            | Store | TeeLocal | Unreachable => TokenCategory::Op,
            Else | End | Then | Mut | Data | Elem | Export | Func | Global | Import | Local
            | Memory | Module | Param | Result | Start | Table | Type => TokenCategory::Keyword,
        }
    }

    pub fn is_value_type(&self) -> bool {
        self.category() == TokenCategory::ValueType
    }

    /// Kinds that can spell a variable reference.
    pub fn is_var(&self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Number)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexed token.
///
/// `value` holds the exact source text, quotes and `$` included. For
/// [`TokenKind::Error`] it holds the diagnostic instead. Equality looks at
/// kind and text only.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn is_var(&self) -> bool {
        self.kind.is_var()
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Name,
            TokenKind::Number,
            TokenKind::Error,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
