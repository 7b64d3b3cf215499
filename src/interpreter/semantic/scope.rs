use std::collections::BTreeMap;

use log::trace;

use crate::interpreter::semantic::symbol::{BuiltinType, Symbol};

/// Nesting level of the global scope.
pub const GLOBAL_LEVEL: usize = 1;

/// A scoped symbol table.
///
/// Names are unique within one scope. The enclosing scope is only
/// remembered by name; the analyzer owns the scopes themselves and walks
/// them as a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope<'ast> {
    name:      String,
    level:     usize,
    enclosing: Option<String>,
    symbols:   BTreeMap<String, Symbol<'ast>>,
}

impl<'ast> Scope<'ast> {
    /// Creates an empty scope.
    ///
    /// # Parameters
    /// - `name`: Scope name, usually the procedure name.
    /// - `level`: Nesting level, [`GLOBAL_LEVEL`] for the outermost scope.
    /// - `enclosing`: Name of the enclosing scope, if any.
    #[must_use]
    pub fn new(name: impl Into<String>, level: usize, enclosing: Option<String>) -> Self {
        Self { name: name.into(),
               level,
               enclosing,
               symbols: BTreeMap::new() }
    }

    /// Creates the global scope with the builtin types already declared.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::semantic::{
    ///     scope::Scope,
    ///     symbol::{BuiltinType, Symbol},
    /// };
    ///
    /// let global = Scope::global();
    /// assert_eq!(global.level(), 1);
    /// assert_eq!(global.lookup_local("REAL"), Some(&Symbol::Type(BuiltinType::Real)));
    /// ```
    #[must_use]
    pub fn global() -> Self {
        let mut scope = Self::new("global", GLOBAL_LEVEL, None);
        for ty in BuiltinType::ALL {
            scope.symbols.insert(ty.name().to_string(), Symbol::Type(ty));
        }
        scope
    }

    /// The scope name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nesting level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Declares `symbol` in this scope.
    ///
    /// # Returns
    /// `false` if the name was already declared here, in which case the
    /// existing binding is kept.
    pub fn insert(&mut self, symbol: Symbol<'ast>) -> bool {
        trace!("Insert: {symbol} (scope {})", self.name);
        if self.symbols.contains_key(symbol.name()) {
            return false;
        }
        self.symbols.insert(symbol.name().to_string(), symbol);
        true
    }

    /// Looks `name` up in this scope only.
    #[must_use]
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol<'ast>> {
        trace!("Lookup: {name} (scope {})", self.name);
        self.symbols.get(name)
    }

    /// Iterates over the declared symbols in name order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol<'ast>> {
        self.symbols.values()
    }
}

impl std::fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = "SCOPE (SCOPED SYMBOL TABLE)";
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "=".repeat(header.len()))?;
        writeln!(f, "{:<15}: {}", "Scope name", self.name)?;
        writeln!(f, "{:<15}: {}", "Scope level", self.level)?;
        writeln!(f,
                 "{:<15}: {}",
                 "Enclosing scope",
                 self.enclosing.as_deref().unwrap_or("None"))?;

        let contents = "Scope (Scoped symbol table) contents";
        writeln!(f, "{contents}")?;
        write!(f, "{}", "-".repeat(contents.len()))?;
        for (name, symbol) in &self.symbols {
            write!(f, "\n{name:>7}: {symbol}")?;
        }
        Ok(())
    }
}
