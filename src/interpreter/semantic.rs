/// Symbols produced by declarations.
///
/// Builtin types, variables and procedures, along with their printable
/// forms used in scope dumps.
pub mod symbol;

/// A single lexical scope.
///
/// Maps names to symbols and knows its nesting level and enclosing scope.
pub mod scope;

/// The semantic analysis pass.
///
/// Walks the tree once, builds the scope chain, resolves every name and
/// records the resolutions in a side table consumed by the evaluator.
pub mod analyzer;
