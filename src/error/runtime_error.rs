use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Read a variable that holds no value in the active records.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable is used.
        position: Position,
    },
    /// A procedure call carries no resolved symbol, meaning the tree was not
    /// analyzed before execution.
    UnresolvedProcedure {
        /// The called name.
        name:     String,
        /// Where the call appears.
        position: Position,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Where the division appears.
        position: Position,
    },
    /// Integer arithmetic overflowed, or a real was out of integer range.
    Overflow {
        /// Where the operation appears.
        position: Position,
    },
    /// Procedure calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured limit.
        limit:    usize,
        /// Where the offending call appears.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::UnresolvedProcedure { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::CallDepthExceeded { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Runtime error on {position}: Undefined variable '{name}'.")
            },
            Self::UnresolvedProcedure { name, position } => write!(f,
                                                                   "Runtime error on {position}: Call to '{name}' was never resolved by semantic analysis."),
            Self::DivisionByZero { position } => {
                write!(f, "Runtime error on {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Runtime error on {position}: Integer overflow while trying to compute result."),
            Self::CallDepthExceeded { limit, position } => write!(f,
                                                                  "Runtime error on {position}: Procedure calls nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for RuntimeError {}
