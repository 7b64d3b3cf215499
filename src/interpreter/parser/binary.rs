use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_factor,
        },
    },
};

/// Parses a full expression.
///
/// Handles the left-associative additive operators `+` and `-`, so `a - b -
/// c` parses as `(a - b) - c`.
///
/// Grammar: `expr := term ((PLUS | MINUS) term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree or a single term.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;
    while let Some(op) = token_to_binary_operator(&tokens.current().token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let position = tokens.advance()?.position;
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `DIV` and `/`.
///
/// Grammar: `term := factor ((MUL | INTDIV | REALDIV) factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens)?;
    while let Some(op) = token_to_binary_operator(&tokens.current().token)
          && matches!(op,
                      BinaryOperator::Mul | BinaryOperator::IntegerDiv | BinaryOperator::RealDiv)
    {
        let position = tokens.advance()?.position;
        let right = parse_factor(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use pascalina::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::IntegerDiv), Some(BinaryOperator::IntegerDiv));
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::RealDiv));
/// assert_eq!(token_to_binary_operator(&Token::Semi), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::IntegerDiv => Some(BinaryOperator::IntegerDiv),
        Token::Slash => Some(BinaryOperator::RealDiv),
        _ => None,
    }
}
