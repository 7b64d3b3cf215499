use pascalina::{
    analyze,
    ast::{Block, Compound, Declaration, Expr, Program, Statement, TypeRef, VarDecl},
    error::SemanticError,
    interpreter::{
        lexer::Position,
        semantic::{
            scope::Scope,
            symbol::{BuiltinType, Symbol},
        },
    },
    parse,
};

fn analyze_source(source: &str) -> Result<(), SemanticError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let program = parse(source).unwrap();
    analyze(&program).map(|_| ())
}

#[test]
fn global_scope_holds_builtins_and_declarations() {
    let program = parse("PROGRAM P; VAR x : REAL; PROCEDURE Alpha(a : INTEGER; b : REAL); \
                         BEGIN END; BEGIN END.").unwrap();
    let analysis = analyze(&program).unwrap();
    let global = analysis.global_scope();

    assert_eq!(global.name(), "global");
    assert_eq!(global.level(), 1);
    assert_eq!(global.symbols().count(), 4);
    assert_eq!(global.lookup_local("x").unwrap().to_string(),
               "<VarSymbol(name='x', type='REAL')>");
    assert_eq!(global.lookup_local("Alpha").unwrap().to_string(),
               "<ProcedureSymbol(name=Alpha, parameters=[<VarSymbol(name='a', type='INTEGER')>,\
                <VarSymbol(name='b', type='REAL')>])>");
    // Parameters belong to the procedure's own scope.
    assert!(global.lookup_local("a").is_none());
}

#[test]
fn scope_table_is_printable() {
    let expected = "SCOPE (SCOPED SYMBOL TABLE)\n\
                    ===========================\n\
                    Scope name     : global\n\
                    Scope level    : 1\n\
                    Enclosing scope: None\n\
                    Scope (Scoped symbol table) contents\n\
                    ------------------------------------\n\
                    INTEGER: <BuiltinTypeSymbol(name='INTEGER')>\n   \
                    REAL: <BuiltinTypeSymbol(name='REAL')>";

    assert_eq!(Scope::global().to_string(), expected);
}

#[test]
fn insert_keeps_the_first_binding() {
    let mut scope = Scope::new("Alpha", 2, Some("global".to_string()));
    assert!(scope.insert(Symbol::Type(BuiltinType::Real)));
    assert!(!scope.insert(Symbol::Type(BuiltinType::Real)));
    assert_eq!(scope.symbols().count(), 1);
}

#[test]
fn calls_and_variables_are_resolved() {
    let program = parse("PROGRAM P; VAR g : INTEGER; \
                         PROCEDURE Outer(n : INTEGER); \
                            PROCEDURE Inner; BEGIN g := n END; \
                         BEGIN Inner() END; \
                         BEGIN Outer(g) END.").unwrap();
    let analysis = analyze(&program).unwrap();

    let Some(Declaration::Procedure(outer)) = program.block.declarations.get(1) else {
        panic!("expected Outer");
    };
    let Some(Declaration::Procedure(inner)) = outer.block.declarations.first() else {
        panic!("expected Inner");
    };
    let Statement::Assign(assign) = &inner.block.compound.statements[0] else {
        panic!("expected an assignment");
    };
    let Expr::Var(n) = &assign.value else {
        panic!("expected a variable");
    };
    assert_eq!(analysis.declared_level(assign.target.id), Some(1));
    assert_eq!(analysis.declared_level(n.id), Some(2));

    let Statement::ProcedureCall(call) = &outer.block.compound.statements[0] else {
        panic!("expected a call");
    };
    let resolved = analysis.procedure(call.id).unwrap();
    assert_eq!(resolved.name, "Inner");
    assert_eq!(resolved.scope_level, 2);
    assert!(std::ptr::eq(resolved.body, &inner.block));
}

#[test]
fn duplicate_declarations_in_one_scope() {
    assert!(matches!(analyze_source("PROGRAM D; VAR a, b : INTEGER; VAR a : REAL; BEGIN END."),
                     Err(SemanticError::DuplicateIdentifier { ref name, .. }) if name == "a"));
    assert!(matches!(analyze_source("PROGRAM D; VAR a : INTEGER; \
                                     PROCEDURE a; BEGIN END; BEGIN END."),
                     Err(SemanticError::DuplicateIdentifier { .. })));
    assert!(matches!(analyze_source("PROGRAM D; \
                                     PROCEDURE P(x : INTEGER; x : REAL); BEGIN END; BEGIN END."),
                     Err(SemanticError::DuplicateIdentifier { ref name, .. }) if name == "x"));
    assert!(matches!(analyze_source("PROGRAM D; \
                                     PROCEDURE P(x : INTEGER); VAR x : REAL; BEGIN END; BEGIN END."),
                     Err(SemanticError::DuplicateIdentifier { .. })));
}

#[test]
fn shadowing_an_outer_name_is_legal() {
    assert_eq!(analyze_source("PROGRAM S; VAR a : INTEGER; \
                               PROCEDURE P(a : REAL); VAR b : INTEGER; BEGIN END; \
                               PROCEDURE Q; VAR a : REAL; BEGIN a := 1 END; \
                               BEGIN END."),
               Ok(()));
    // A procedure's own name may be reused inside it.
    assert_eq!(analyze_source("PROGRAM S; PROCEDURE P; VAR P : INTEGER; BEGIN P := 1 END; \
                               BEGIN END."),
               Ok(()));
}

#[test]
fn undefined_names() {
    assert_eq!(analyze_source("PROGRAM U; VAR b : INTEGER; BEGIN b := 2 + a END."),
               Err(SemanticError::UndefinedIdentifier { name:     "a".to_string(),
                                                        position: Position::new(1, 44), }));
    assert!(matches!(analyze_source("PROGRAM U; BEGIN Missing() END."),
                     Err(SemanticError::UndefinedIdentifier { .. })));
    // Locals of a procedure are not visible after it.
    assert!(matches!(analyze_source("PROGRAM U; VAR g : INTEGER; \
                                     PROCEDURE P; VAR hidden : INTEGER; BEGIN END; \
                                     BEGIN g := hidden END."),
                     Err(SemanticError::UndefinedIdentifier { ref name, .. }) if name == "hidden"));
}

#[test]
fn undefined_type() {
    let position = Position::new(1, 1);
    let program = Program { name: "T".to_string(),
                            block: Block { declarations: vec![Declaration::Var(VarDecl {
                                name:     "flag".to_string(),
                                type_ref: TypeRef { name:     "BOOLEAN".to_string(),
                                                    position: Position::new(1, 20), },
                                position,
                            })],
                                           compound:     Compound { statements: vec![] }, },
                            position };

    assert_eq!(analyze(&program).map(|_| ()),
               Err(SemanticError::UndefinedType { name:     "BOOLEAN".to_string(),
                                                  position: Position::new(1, 20), }));
}

#[test]
fn recursion_and_earlier_siblings_resolve() {
    assert_eq!(analyze_source("PROGRAM R; \
                               PROCEDURE Loop(n : INTEGER); BEGIN Loop(n + 1) END; \
                               PROCEDURE Later; BEGIN Loop(0) END; \
                               BEGIN Later() END."),
               Ok(()));
    // Declarations are checked in order, so a later sibling is not visible.
    assert!(matches!(analyze_source("PROGRAM R; \
                                     PROCEDURE First; BEGIN Second() END; \
                                     PROCEDURE Second; BEGIN END; \
                                     BEGIN END."),
                     Err(SemanticError::UndefinedIdentifier { ref name, .. }) if name == "Second"));
}

#[test]
fn names_must_be_used_as_what_they_are() {
    assert!(matches!(analyze_source("PROGRAM K; PROCEDURE P; BEGIN END; BEGIN P := 1 END."),
                     Err(SemanticError::NotAVariable { .. })));
    assert!(matches!(analyze_source("PROGRAM K; VAR x : INTEGER; BEGIN x := 1; x() END."),
                     Err(SemanticError::NotAProcedure { .. })));
}

#[test]
fn argument_count_must_match() {
    assert_eq!(analyze_source("PROGRAM A; PROCEDURE P(a, b : INTEGER); BEGIN END; \
                               BEGIN P(1) END."),
               Err(SemanticError::ArgumentCountMismatch { name:     "P".to_string(),
                                                          expected: 2,
                                                          found:    1,
                                                          position: Position::new(1, 58), }));
}
