use crate::{
    ast::{Expr, LiteralValue, UnaryOperator, Var},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream},
            utils::parse_identifier,
        },
    },
};

/// Parses a factor.
///
/// Signs are right-associative, so `- + x` parses as `-(+x)`.
///
/// Grammar:
/// ```text
///     factor := (PLUS | MINUS) factor
///             | INT_CONST
///             | REAL_CONST
///             | LPAREN expr RPAREN
///             | variable
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Expr`].
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let current = tokens.current();
    let position = current.position;

    match current.token {
        Token::Plus | Token::Minus => {
            let op = if tokens.check(&Token::Plus) {
                UnaryOperator::Plus
            } else {
                UnaryOperator::Negate
            };
            tokens.advance()?;
            let expr = parse_factor(tokens)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               position })
        },
        Token::IntegerConst(n) => {
            tokens.advance()?;
            Ok(Expr::Num { value: LiteralValue::Integer(n),
                           position })
        },
        Token::RealConst(r) => {
            tokens.advance()?;
            Ok(Expr::Num { value: LiteralValue::Real(r),
                           position })
        },
        Token::LParen => {
            tokens.advance()?;
            let expr = parse_expression(tokens)?;
            tokens.eat(&Token::RParen)?;
            Ok(expr)
        },
        Token::Identifier(_) => Ok(Expr::Var(parse_variable(tokens)?)),
        _ => Err(tokens.unexpected("expression")),
    }
}

/// Parses a variable reference and gives it a fresh node id.
///
/// Grammar: `variable := ID`
pub fn parse_variable(tokens: &mut TokenStream<'_>) -> ParseResult<Var> {
    let (name, position) = parse_identifier(tokens)?;

    Ok(Var { id: tokens.next_node_id(),
             name,
             position })
}
