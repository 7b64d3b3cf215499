use crate::{error::LexicalError, interpreter::lexer::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// Tokens are pulled from the lexer on demand, so a lexical failure surfaces
/// here too, wrapped in [`SyntaxError::Lexical`].
pub enum SyntaxError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// Description of what the grammar required instead.
        expected: String,
        /// Where the unexpected token starts.
        position: Position,
    },
    /// Found extra tokens after the terminating `.` of the program.
    TrailingTokens {
        /// Description of the first extra token.
        found:    String,
        /// Where the extra token starts.
        position: Position,
    },
    /// The lexer failed while the parser was pulling the next token.
    Lexical(LexicalError),
}

impl SyntaxError {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::TrailingTokens { position, .. } => {
                *position
            },
            Self::Lexical(e) => e.position(),
        }
    }
}

impl From<LexicalError> for SyntaxError {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => write!(f,
                                                          "Syntax error on {position}: Unexpected token {found}, expected {expected}."),
            Self::TrailingTokens { found, position } => write!(f,
                                                               "Syntax error on {position}: Extra tokens after the end of the program: {found}."),
            Self::Lexical(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            _ => None,
        }
    }
}
