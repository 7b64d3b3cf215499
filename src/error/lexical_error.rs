use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexicalError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A `{` comment with no closing `}` before the end of input.
    UnterminatedComment {
        /// Where the comment opens.
        position: Position,
    },
    /// An integer literal too large to be represented.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexicalError {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedComment { position }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Lexical error on {position}: Unexpected character '{character}'.")
            },
            Self::UnterminatedComment { position } => {
                write!(f, "Lexical error on {position}: Comment is never closed.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Lexical error on {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
