/// Core parsing state and entry point.
///
/// Holds the token stream with its single-token lookahead buffer, node id
/// allocation and the top-level `parse` function.
pub mod core;

/// Program, block and declaration parsing.
///
/// Handles the `PROGRAM` header, `VAR` sections, procedure declarations with
/// their formal parameters, and type specifications.
pub mod block;

/// Statement parsing.
///
/// Compound statements, statement lists, assignments, procedure calls and
/// the empty statement.
pub mod statement;

/// Binary operator parsing.
///
/// Additive and multiplicative precedence levels, both left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Signed factors, literals, parenthesized expressions and variables.
pub mod unary;

/// Helpers shared by the parsing functions.
pub mod utils;
