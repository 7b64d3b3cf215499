use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all static errors found by the semantic analyzer.
pub enum SemanticError {
    /// A name was declared twice in the same scope.
    DuplicateIdentifier {
        /// The duplicated name.
        name:     String,
        /// Where the second declaration appears.
        position: Position,
    },
    /// A name is used but not visible from the point of use.
    UndefinedIdentifier {
        /// The unresolved name.
        name:     String,
        /// Where the name is used.
        position: Position,
    },
    /// A declaration names a type that does not exist.
    UndefinedType {
        /// The unresolved type name.
        name:     String,
        /// Where the type is referenced.
        position: Position,
    },
    /// A name used as a variable resolves to a type or a procedure.
    NotAVariable {
        /// The offending name.
        name:     String,
        /// Where the name is used.
        position: Position,
    },
    /// A called name resolves to a type or a variable.
    NotAProcedure {
        /// The offending name.
        name:     String,
        /// Where the call appears.
        position: Position,
    },
    /// A procedure call supplies the wrong number of arguments.
    ArgumentCountMismatch {
        /// The called procedure.
        name:     String,
        /// Number of formal parameters.
        expected: usize,
        /// Number of actual arguments.
        found:    usize,
        /// Where the call appears.
        position: Position,
    },
}

impl SemanticError {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DuplicateIdentifier { position, .. }
            | Self::UndefinedIdentifier { position, .. }
            | Self::UndefinedType { position, .. }
            | Self::NotAVariable { position, .. }
            | Self::NotAProcedure { position, .. }
            | Self::ArgumentCountMismatch { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier { name, position } => {
                write!(f, "Semantic error on {position}: Duplicate identifier '{name}' found.")
            },
            Self::UndefinedIdentifier { name, position } => {
                write!(f, "Semantic error on {position}: Identifier not found: '{name}'.")
            },
            Self::UndefinedType { name, position } => {
                write!(f, "Semantic error on {position}: Undefined type '{name}'.")
            },
            Self::NotAVariable { name, position } => {
                write!(f, "Semantic error on {position}: '{name}' is not a variable.")
            },
            Self::NotAProcedure { name, position } => {
                write!(f, "Semantic error on {position}: '{name}' is not a procedure.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Semantic error on {position}: Procedure '{name}' expects {expected} argument(s), but {found} were given."),
        }
    }
}

impl std::error::Error for SemanticError {}
