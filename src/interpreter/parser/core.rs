use crate::{
    ast::{NodeId, Program},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, SpannedToken, Token},
        parser::block::parse_program,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Pull-based token source for the parser.
///
/// Keeps the current token plus at most one buffered lookahead token, and
/// only asks the lexer for more when the parser advances or peeks.
pub struct TokenStream<'src> {
    lexer:     Lexer<'src>,
    current:   SpannedToken,
    lookahead: Option<SpannedToken>,
    next_id:   usize,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream and scans its first token.
    ///
    /// # Errors
    /// Returns `SyntaxError::Lexical` if the first token cannot be scanned.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  lookahead: None,
                  next_id: 0 })
    }

    /// Returns the token the parser is positioned at.
    #[must_use]
    pub const fn current(&self) -> &SpannedToken {
        &self.current
    }

    /// Returns the token after the current one without consuming anything.
    ///
    /// # Errors
    /// Returns `SyntaxError::Lexical` if the lookahead cannot be scanned.
    pub fn peek_next(&mut self) -> ParseResult<&SpannedToken> {
        let lookahead = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(lookahead))
    }

    /// Moves to the next token and returns the one that was current.
    ///
    /// # Errors
    /// Returns `SyntaxError::Lexical` if the next token cannot be scanned.
    pub fn advance(&mut self) -> ParseResult<SpannedToken> {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns `true` if the current token equals `token`.
    #[must_use]
    pub fn check(&self, token: &Token) -> bool {
        self.current.token == *token
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// # Parameters
    /// - `expected`: The token the grammar requires.
    ///
    /// # Errors
    /// Returns `SyntaxError::UnexpectedToken` on a mismatch.
    pub fn eat(&mut self, expected: &Token) -> ParseResult<SpannedToken> {
        if self.check(expected) {
            self.advance()
        } else {
            Err(self.unexpected(&expected.describe()))
        }
    }

    /// Builds an `UnexpectedToken` error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError::UnexpectedToken { found:    self.current.token.describe(),
                                       expected: expected.to_string(),
                                       position: self.current.position, }
    }

    /// Allocates the next node id.
    pub fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Parses a complete program from a token source.
///
/// The whole stream must be consumed: anything after the terminating `.`
/// is an error.
///
/// Grammar: `program := PROGRAM ID SEMI block DOT`
///
/// # Parameters
/// - `lexer`: The token source, pulled one token at a time.
///
/// # Returns
/// The root [`Program`] node.
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered, including lexical errors
/// raised while pulling tokens.
///
/// # Example
/// ```
/// use pascalina::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let program = parse(tokenize("PROGRAM Empty; BEGIN END.")).unwrap();
/// assert_eq!(program.name, "Empty");
///
/// assert!(parse(tokenize("PROGRAM Empty; BEGIN END. extra")).is_err());
/// ```
pub fn parse(lexer: Lexer<'_>) -> ParseResult<Program> {
    let mut tokens = TokenStream::new(lexer)?;
    let program = parse_program(&mut tokens)?;

    let trailing = tokens.current();
    if trailing.token != Token::EndOfInput {
        return Err(SyntaxError::TrailingTokens { found:    trailing.token.describe(),
                                                 position: trailing.position, });
    }

    Ok(program)
}
