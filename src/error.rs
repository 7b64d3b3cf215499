/// Lexical errors.
///
/// Raised by the lexer for characters that start no token and for literals
/// that cannot be represented.
pub mod lexical_error;
/// Syntax errors.
///
/// Raised by the parser when a token does not fit the grammar, or when
/// tokens remain after the end of the program.
pub mod syntax_error;
/// Semantic errors.
///
/// Raised by the semantic analyzer for duplicate declarations, unresolved
/// names and types, misused names and wrong argument counts.
pub mod semantic_error;
/// Runtime errors.
///
/// Raised by the interpreter for unbound variables, arithmetic faults and
/// runaway call depth.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of the pipeline, tagged with the stage that produced it.
pub enum Error {
    /// The source text could not be tokenized.
    Lexical(LexicalError),
    /// The token stream does not match the grammar.
    Syntax(SyntaxError),
    /// The program is syntactically valid but statically wrong.
    Semantic(SemanticError),
    /// The program failed while executing.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Semantic(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<LexicalError> for Error {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        match e {
            SyntaxError::Lexical(e) => Self::Lexical(e),
            other => Self::Syntax(other),
        }
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
