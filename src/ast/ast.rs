use super::types::{FuncSig, Local};

/// Root of the tree.
///
/// `types` and `funcs` keep declaration order, which index references
/// depend on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub name: Option<String>,
    pub types: Vec<TypeDef>,
    pub funcs: Vec<Func>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    pub name: Option<String>,
    pub func: FuncSig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    pub name: Option<String>,
    pub signature: FuncSig,
    pub kind: FuncKind,
}

/// How a function is provided: defined here (optionally exported under an
/// external name) or imported from another module.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncKind {
    Defined {
        export: Option<EmbeddedExport>,
        body: FuncBody,
    },
    Imported(EmbeddedImport),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncBody {
    pub locals: Vec<Local>,
    pub instructions: Vec<Instruction>,
}

impl Func {
    /// Locals of a defined function; imported functions have none.
    pub fn locals(&self) -> &[Local] {
        match &self.kind {
            FuncKind::Defined { body, .. } => &body.locals,
            FuncKind::Imported(_) => &[],
        }
    }

    pub fn export(&self) -> Option<&EmbeddedExport> {
        match &self.kind {
            FuncKind::Defined { export, .. } => export.as_ref(),
            FuncKind::Imported(_) => None,
        }
    }

    pub fn import(&self) -> Option<&EmbeddedImport> {
        match &self.kind {
            FuncKind::Imported(import) => Some(import),
            FuncKind::Defined { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedExport {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImport {
    pub module: String,
    pub name: String,
}

/// Placeholder for function body instructions, which are not parsed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction;
