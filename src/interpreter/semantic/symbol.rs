use std::rc::Rc;

use crate::ast::Block;

/// The builtin scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

impl BuiltinType {
    /// Every builtin type, in the order they are declared in the global
    /// scope.
    pub const ALL: [Self; 2] = [Self::Integer, Self::Real];

    /// Returns the canonical name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
        }
    }
}

impl std::fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A declared variable or formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSymbol {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub ty:   BuiltinType,
}

impl std::fmt::Display for VarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<VarSymbol(name='{}', type='{}')>", self.name, self.ty)
    }
}

/// A declared procedure.
///
/// Borrows its body from the tree so the evaluator can run it without a
/// second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureSymbol<'ast> {
    /// The procedure name.
    pub name:        String,
    /// Formal parameters, in declaration order.
    pub params:      Vec<VarSymbol>,
    /// Level of the scope the procedure is declared in. Its own scope, and
    /// the activation records created for it, sit one level deeper.
    pub scope_level: usize,
    /// The procedure body.
    pub body:        &'ast Block,
}

impl std::fmt::Display for ProcedureSymbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params
                         .iter()
                         .map(ToString::to_string)
                         .collect::<Vec<_>>()
                         .join(",");
        write!(f, "<ProcedureSymbol(name={}, parameters=[{params}])>", self.name)
    }
}

/// Anything a name can be bound to in a scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol<'ast> {
    /// A builtin type name.
    Type(BuiltinType),
    /// A variable or parameter.
    Var(VarSymbol),
    /// A procedure, shared with every call site that resolves to it.
    Procedure(Rc<ProcedureSymbol<'ast>>),
}

impl Symbol<'_> {
    /// Returns the name the symbol is bound under.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::semantic::symbol::{BuiltinType, Symbol, VarSymbol};
    ///
    /// let var = Symbol::Var(VarSymbol { name: "x".to_string(),
    ///                                   ty:   BuiltinType::Real, });
    /// assert_eq!(var.name(), "x");
    /// assert_eq!(Symbol::Type(BuiltinType::Integer).name(), "INTEGER");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Type(ty) => ty.name(),
            Self::Var(var) => &var.name,
            Self::Procedure(procedure) => &procedure.name,
        }
    }
}

impl std::fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "<BuiltinTypeSymbol(name='{ty}')>"),
            Self::Var(var) => write!(f, "{var}"),
            Self::Procedure(procedure) => write!(f, "{procedure}"),
        }
    }
}
