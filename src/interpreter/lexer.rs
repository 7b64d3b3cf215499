use log::trace;
use logos::Logos;

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Reserved words are matched case-insensitively; identifiers keep their
/// spelling.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `PROGRAM`
    #[token("program", ignore(case))]
    Program,
    /// `PROCEDURE`
    #[token("procedure", ignore(case))]
    Procedure,
    /// `VAR`
    #[token("var", ignore(case))]
    Var,
    /// `DIV`, truncating integer division.
    #[token("div", ignore(case))]
    IntegerDiv,
    /// `INTEGER` type name.
    #[token("integer", ignore(case))]
    IntegerType,
    /// `REAL` type name.
    #[token("real", ignore(case))]
    RealType,
    /// `BEGIN`
    #[token("begin", ignore(case))]
    Begin,
    /// `END`
    #[token("end", ignore(case))]
    End,
    /// Real literal tokens, such as `3.14`. A `.` only extends an integer
    /// when digits follow it.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    RealConst(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    IntegerConst(i64),
    /// Identifier tokens; a letter followed by letters or digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semi,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`, real division.
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{ Block comments. }`
    #[regex(r"\{[^}]*\}", |lex| {
        let comment = lex.slice();
        let newlines = comment.chars().filter(|&c| c == '\n').count();
        if let Some(offset) = comment.rfind('\n') {
            lex.extras.line += newlines;
            lex.extras.line_start = lex.span().start + offset + 1;
        }
        logos::Skip
    }, allow_greedy = true)]
    Comment,
    /// Line breaks move the position to the next line.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the scanner; the [`Lexer`] yields it
    /// once the source is exhausted.
    EndOfInput,
}

impl Token {
    /// Returns a human-readable description of the token for diagnostics.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Assign.describe(), "':='");
    /// assert_eq!(Token::Identifier("x".into()).describe(), "identifier 'x'");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Program => "'PROGRAM'".to_string(),
            Self::Procedure => "'PROCEDURE'".to_string(),
            Self::Var => "'VAR'".to_string(),
            Self::IntegerDiv => "'DIV'".to_string(),
            Self::IntegerType => "'INTEGER'".to_string(),
            Self::RealType => "'REAL'".to_string(),
            Self::Begin => "'BEGIN'".to_string(),
            Self::End => "'END'".to_string(),
            Self::RealConst(r) => format!("real '{r}'"),
            Self::IntegerConst(n) => format!("integer '{n}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Assign => "':='".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Semi => "';'".to_string(),
            Self::Dot => "'.'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            // Skipped by the scanner, so never part of a diagnostic.
            Self::Comment | Self::NewLine | Self::Ignored => "skipped input".to_string(),
            Self::EndOfInput => "end of input".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The source line, starting at 1.
    pub line:   usize,
    /// The column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token itself.
    pub token:    Token,
    /// Where the token starts.
    pub position: Position,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so that columns can be derived from token spans.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Demand-driven tokenizer over one source text.
///
/// Each call to [`Lexer::next_token`] scans exactly one more token. Once the
/// source is exhausted a single [`Token::EndOfInput`] is produced; as an
/// iterator the lexer then stops. It cannot be rewound or restarted.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Token::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// Scans and returns the next token.
    ///
    /// After the end of input has been reached this keeps returning
    /// [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns a [`LexicalError`] for a character that starts no token, for
    /// a `{` comment that is never closed, or for an integer literal that
    /// does not fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("a := 2");
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("a".into()));
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Assign);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::IntegerConst(2));
    /// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<SpannedToken, LexicalError> {
        let Some(result) = self.inner.next() else {
            self.finished = true;
            return Ok(SpannedToken { token:    Token::EndOfInput,
                                     position: self.current_position(self.inner.source().len()), });
        };

        let position = self.current_position(self.inner.span().start);
        let slice = self.inner.slice();

        match result {
            Ok(token) => {
                trace!("token {token} at {position}");
                Ok(SpannedToken { token, position })
            },
            Err(()) if slice.starts_with('{') => {
                Err(LexicalError::UnterminatedComment { position })
            },
            Err(()) if slice.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(LexicalError::LiteralTooLarge { literal: slice.to_string(),
                                                    position })
            },
            Err(()) => {
                let character = slice.chars().next().unwrap_or('\0');
                Err(LexicalError::UnexpectedCharacter { character, position })
            },
        }
    }

    /// Converts a byte offset on the current line into a [`Position`].
    fn current_position(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        Position::new(extras.line, offset.saturating_sub(extras.line_start) + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedToken, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

/// Returns a lazy, finite token sequence over `source`.
///
/// The sequence ends with [`Token::EndOfInput`], or with the first lexical
/// error.
///
/// # Example
/// ```
/// use pascalina::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("BEGIN END.").map(|t| t.unwrap().token).collect();
/// assert_eq!(tokens, vec![Token::Begin, Token::End, Token::Dot, Token::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid real.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
