use crate::interpreter::{
    lexer::{Position, Token},
    parser::core::{ParseResult, TokenStream},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by procedure-call argument lists. It repeatedly
/// calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if an item fails to parse or a token other than
/// `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.check(closing) {
        tokens.advance()?;
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if tokens.check(&Token::Comma) {
            tokens.advance()?;
        } else if tokens.check(closing) {
            tokens.advance()?;
            break;
        } else {
            return Err(tokens.unexpected(&format!("',' or {}", closing.describe())));
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and position.
///
/// The current token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `SyntaxError` if the current token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<(String, Position)> {
    let current = tokens.current();
    if let Token::Identifier(name) = &current.token {
        let identifier = (name.clone(), current.position);
        tokens.advance()?;
        Ok(identifier)
    } else {
        Err(tokens.unexpected("identifier"))
    }
}

/// Parses one or more identifiers separated by commas.
///
/// Grammar: `ids := ID ("," ID)*`
///
/// # Errors
/// Returns a `SyntaxError` if an identifier is missing.
pub(in crate::interpreter::parser) fn parse_identifier_list(tokens: &mut TokenStream<'_>)
                                                            -> ParseResult<Vec<(String, Position)>> {
    let mut names = vec![parse_identifier(tokens)?];
    while tokens.check(&Token::Comma) {
        tokens.advance()?;
        names.push(parse_identifier(tokens)?);
    }
    Ok(names)
}
