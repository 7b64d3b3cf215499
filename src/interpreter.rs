/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// tagged with the line and column it starts at. Reserved words are
/// recognized case-insensitively and `{ ... }` comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles integer and real literals, identifiers, operators and keywords.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead, pulling tokens
/// from the lexer only as it needs them.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, one grammar production per function.
/// - Reports the first unexpected token with its position and stops.
/// - Assigns node ids used by later passes to attach resolutions.
pub mod parser;
/// Static checking of a parsed program.
///
/// Builds the lexical scope chain, rejects duplicate and unresolved names,
/// and produces the side table that the evaluator runs against.
pub mod semantic;
/// The evaluator module executes an analyzed AST.
///
/// # Responsibilities
/// - Runs statements in order and evaluates arithmetic expressions.
/// - Manages activation records for the program and each procedure call.
/// - Reports runtime errors such as division by zero or unbound variables.
pub mod evaluator;
/// Runtime frames.
///
/// Activation records hold variable bindings for one program or procedure
/// execution; the call stack orders them and follows their static links.
pub mod call_stack;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either integers or reals; this module also holds the
/// conversions used when an operator needs one or the other.
pub mod value;
