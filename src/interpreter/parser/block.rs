use crate::{
    ast::{Block, Declaration, Param, ProcedureDecl, Program, TypeRef, VarDecl},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_compound_statement,
            utils::{parse_identifier, parse_identifier_list},
        },
    },
};

/// Parses the program header and body.
///
/// Grammar: `program := PROGRAM ID SEMI block DOT`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `PROGRAM`.
///
/// # Returns
/// The root [`Program`] node.
pub fn parse_program(tokens: &mut TokenStream<'_>) -> ParseResult<Program> {
    let position = tokens.eat(&Token::Program)?.position;
    let (name, _) = parse_identifier(tokens)?;
    tokens.eat(&Token::Semi)?;
    let block = parse_block(tokens)?;
    tokens.eat(&Token::Dot)?;

    Ok(Program { name,
                 block,
                 position })
}

/// Parses a block: its declarations followed by a compound statement.
///
/// Grammar: `block := declarations compoundStatement`
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Block> {
    let declarations = parse_declarations(tokens)?;
    let compound = parse_compound_statement(tokens)?;

    Ok(Block { declarations,
               compound })
}

/// Parses all declarations of a block.
///
/// Every `VAR` section comes before every procedure declaration. Each
/// section holds one or more `varDecl ;` entries, and a list like `a, b :
/// INTEGER` becomes one [`VarDecl`] per name.
///
/// Grammar:
/// ```text
///     declarations := (VAR (varDecl SEMI)+)*
///                     (PROCEDURE ID (LPAREN paramList RPAREN)? SEMI block SEMI)*
/// ```
pub fn parse_declarations(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Declaration>> {
    let mut declarations = Vec::new();

    while tokens.check(&Token::Var) {
        tokens.advance()?;
        loop {
            declarations.extend(parse_variable_declaration(tokens)?.into_iter()
                                                                   .map(Declaration::Var));
            tokens.eat(&Token::Semi)?;

            if !matches!(tokens.current().token, Token::Identifier(_)) {
                break;
            }
        }
    }

    while tokens.check(&Token::Procedure) {
        declarations.push(Declaration::Procedure(parse_procedure_declaration(tokens)?));
    }

    Ok(declarations)
}

/// Parses one variable declaration line.
///
/// Grammar: `varDecl := ID (COMMA ID)* COLON typeSpec`
fn parse_variable_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<VarDecl>> {
    let names = parse_identifier_list(tokens)?;
    tokens.eat(&Token::Colon)?;
    let type_ref = parse_type_spec(tokens)?;

    Ok(names.into_iter()
            .map(|(name, position)| VarDecl { name,
                                              type_ref: type_ref.clone(),
                                              position })
            .collect())
}

/// Parses a procedure declaration including its trailing semicolon.
///
/// An empty parameter list `()` is accepted and means the same as no list.
///
/// Grammar: `PROCEDURE ID (LPAREN paramList? RPAREN)? SEMI block SEMI`
fn parse_procedure_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<ProcedureDecl> {
    tokens.eat(&Token::Procedure)?;
    let (name, position) = parse_identifier(tokens)?;

    let mut params = Vec::new();
    if tokens.check(&Token::LParen) {
        tokens.advance()?;
        if !tokens.check(&Token::RParen) {
            params = parse_formal_parameter_list(tokens)?;
        }
        tokens.eat(&Token::RParen)?;
    }

    tokens.eat(&Token::Semi)?;
    let block = parse_block(tokens)?;
    tokens.eat(&Token::Semi)?;

    Ok(ProcedureDecl { name,
                       params,
                       block,
                       position })
}

/// Parses formal parameter groups separated by semicolons.
///
/// Grammar:
/// ```text
///     paramList := param (SEMI param)*
///     param     := ID (COMMA ID)* COLON typeSpec
/// ```
fn parse_formal_parameter_list(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Param>> {
    let mut params = Vec::new();
    loop {
        let names = parse_identifier_list(tokens)?;
        tokens.eat(&Token::Colon)?;
        let type_ref = parse_type_spec(tokens)?;
        params.extend(names.into_iter().map(|(name, position)| Param { name,
                                                                      type_ref:
                                                                          type_ref.clone(),
                                                                      position }));

        if !tokens.check(&Token::Semi) {
            break;
        }
        tokens.advance()?;
    }
    Ok(params)
}

/// Parses a builtin type name.
///
/// Grammar: `typeSpec := INTEGER | REAL`
///
/// # Errors
/// Returns a `SyntaxError` if the current token is not a type name.
pub fn parse_type_spec(tokens: &mut TokenStream<'_>) -> ParseResult<TypeRef> {
    let name = match tokens.current().token {
        Token::IntegerType => "INTEGER",
        Token::RealType => "REAL",
        _ => return Err(tokens.unexpected("type name 'INTEGER' or 'REAL'")),
    };
    let position = tokens.advance()?.position;

    Ok(TypeRef { name: name.to_string(),
                 position })
}
