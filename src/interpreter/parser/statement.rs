use crate::{
    ast::{Assign, Compound, ProcedureCall, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream},
            unary::parse_variable,
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a compound statement.
///
/// Grammar: `compoundStmt := BEGIN statementList END`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `BEGIN`.
///
/// # Returns
/// The [`Compound`] node with its statements in source order.
pub fn parse_compound_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Compound> {
    tokens.eat(&Token::Begin)?;
    let statements = parse_statement_list(tokens)?;
    tokens.eat(&Token::End)?;

    Ok(Compound { statements })
}

/// Parses statements separated by semicolons.
///
/// Grammar: `statementList := statement (SEMI statement)*`
fn parse_statement_list(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Statement>> {
    let mut statements = vec![parse_statement(tokens)?];
    while tokens.check(&Token::Semi) {
        tokens.advance()?;
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a single statement.
/// A statement may be one of:
/// - a nested compound statement,
/// - a procedure call,
/// - an assignment,
/// - the empty statement.
///
/// An identifier starts either a call or an assignment. The token after the
/// identifier decides: `(` means a call. That token is peeked, not consumed,
/// so whitespace and comments in between do not matter.
///
/// Grammar:
/// ```text
///     statement := compoundStmt | procCallStmt | assignStmt | empty
/// ```
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if tokens.check(&Token::Begin) {
        return Ok(Statement::Compound(parse_compound_statement(tokens)?));
    }

    if matches!(tokens.current().token, Token::Identifier(_)) {
        if tokens.peek_next()?.token == Token::LParen {
            return Ok(Statement::ProcedureCall(parse_procedure_call(tokens)?));
        }
        return Ok(Statement::Assign(parse_assignment(tokens)?));
    }

    Ok(Statement::NoOp)
}

/// Parses a procedure call statement.
///
/// Grammar: `procCallStmt := ID LPAREN (expr (COMMA expr)*)? RPAREN`
fn parse_procedure_call(tokens: &mut TokenStream<'_>) -> ParseResult<ProcedureCall> {
    let (name, position) = parse_identifier(tokens)?;
    tokens.eat(&Token::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(ProcedureCall { id: tokens.next_node_id(),
                       name,
                       arguments,
                       position })
}

/// Parses an assignment statement.
///
/// Grammar: `assignStmt := variable ASSIGN expr`
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Assign> {
    let target = parse_variable(tokens)?;
    let position = tokens.eat(&Token::Assign)?.position;
    let value = parse_expression(tokens)?;

    Ok(Assign { target,
                value,
                position })
}
