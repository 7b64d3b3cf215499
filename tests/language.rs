use std::fs;

use pascalina::{
    error::{Error, RuntimeError, SemanticError},
    interpreter::{call_stack::ActivationRecord, value::Value},
    run_program,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "pas"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let record = run_program(&content).unwrap_or_else(|e| {
                                               panic!("Program {path:?} failed:\n{content}\nError: {e}")
                                           });

        for (name, expected) in extract_expectations(&content) {
            let actual = record.get(&name)
                               .unwrap_or_else(|| panic!("{path:?}: '{name}' is unbound"));
            assert_value(actual, expected, &format!("{path:?}: '{name}'"));
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

/// Collects `{ expect name = value }` comments.
fn extract_expectations(content: &str) -> Vec<(String, Value)> {
    content.lines()
           .filter_map(|line| {
               let inner = line.trim().strip_prefix("{ expect ")?.strip_suffix('}')?;
               let (name, value) = inner.split_once('=')?;
               let value = value.trim();
               let value = if value.contains('.') {
                   Value::Real(value.parse().ok()?)
               } else {
                   Value::Integer(value.parse().ok()?)
               };
               Some((name.trim().to_string(), value))
           })
           .collect()
}

fn assert_value(actual: Value, expected: Value, context: &str) {
    match (actual, expected) {
        (Value::Real(a), Value::Real(e)) => {
            assert!((a - e).abs() < 1e-9, "{context}: expected {e}, got {a}");
        },
        _ => assert_eq!(actual, expected, "{context}"),
    }
}

fn assert_success(src: &str) -> ActivationRecord {
    run_program(src).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match run_program(src) {
        Ok(record) => panic!("Program succeeded but was expected to fail:\n{record}"),
        Err(e) => e,
    }
}

#[test]
fn end_to_end_bindings() {
    let record = assert_success("PROGRAM T; VAR a,b:INTEGER; y:REAL; BEGIN a:=2; \
                                 b:=10*a+10*a DIV 4; y:=20/7+3.14; END.");

    assert_eq!(record.name(), "T");
    assert_eq!(record.nesting_level(), 1);
    assert_eq!(record.get("a"), Some(Value::Integer(2)));
    assert_eq!(record.get("b"), Some(Value::Integer(25)));
    let Some(Value::Real(y)) = record.get("y") else {
        panic!("y should be real");
    };
    assert!((y - 5.997_142_857).abs() < 1e-6);
}

#[test]
fn integer_and_real_division() {
    let record = assert_success("PROGRAM D; VAR a, b, c, d : INTEGER; x, y : REAL; BEGIN \
                                 a := 7 DIV 2; b := -7 DIV 2; c := 7.9 DIV 2; d := 8 - 3 - 2; \
                                 x := 4 / 2; y := 1 / 4 * 2 END.");

    assert_eq!(record.get("a"), Some(Value::Integer(3)));
    assert_eq!(record.get("b"), Some(Value::Integer(-3)));
    assert_eq!(record.get("c"), Some(Value::Integer(3)));
    assert_eq!(record.get("d"), Some(Value::Integer(3)));
    assert_eq!(record.get("x"), Some(Value::Real(2.0)));
    assert_eq!(record.get("y"), Some(Value::Real(0.5)));
}

#[test]
fn promotion_keeps_integers_integral() {
    let record = assert_success("PROGRAM P; VAR i, r : REAL; BEGIN i := 2 * 3 + 1; r := 2 * 3.0 END.");

    // Assignments are not coerced to the declared type.
    assert_eq!(record.get("i"), Some(Value::Integer(7)));
    assert_eq!(record.get("r"), Some(Value::Real(6.0)));
}

#[test]
fn large_integers_promote_to_real() {
    let record = assert_success("PROGRAM B; VAR x, y : REAL; BEGIN \
                                 x := 9007199254740993 / 2; y := 10000000000000001 + 0.5 END.");

    assert_eq!(record.get("x"), Some(Value::Real(4_503_599_627_370_496.0)));
    assert!(matches!(record.get("y"), Some(Value::Real(y)) if (y - 1e16).abs() <= 2.0));
}

#[test]
fn nested_procedure_reads_enclosing_variables() {
    let record = assert_success("PROGRAM Outer; VAR result : INTEGER;
                                 PROCEDURE Wrapper(seed : INTEGER);
                                 VAR local : INTEGER;
                                    PROCEDURE Inner;
                                    BEGIN result := local + seed END;
                                 BEGIN local := 10; Inner() END;
                                 BEGIN Wrapper(5) END.");

    assert_eq!(record.get("result"), Some(Value::Integer(15)));
}

#[test]
fn nested_procedure_writes_enclosing_variables() {
    let record = assert_success("PROGRAM Outer; VAR seen : INTEGER;
                                 PROCEDURE Wrapper;
                                 VAR counter : INTEGER;
                                    PROCEDURE Bump;
                                    BEGIN counter := counter + 1 END;
                                 BEGIN counter := 0; Bump(); Bump(); seen := counter END;
                                 BEGIN Wrapper() END.");

    assert_eq!(record.get("seen"), Some(Value::Integer(2)));
}

#[test]
fn procedure_locals_do_not_leak() {
    let record = assert_success("PROGRAM Main; VAR a : INTEGER;
                                 PROCEDURE P; VAR a : INTEGER; BEGIN a := 99 END;
                                 BEGIN a := 1; P() END.");

    assert_eq!(record.get("a"), Some(Value::Integer(1)));
    assert_eq!(record.members().count(), 1);
}

#[test]
fn parameters_are_passed_by_value() {
    let record = assert_success("PROGRAM Main; VAR a : INTEGER;
                                 PROCEDURE P(a : INTEGER); BEGIN a := a + 1 END;
                                 BEGIN a := 1; P(a) END.");

    assert_eq!(record.get("a"), Some(Value::Integer(1)));
}

#[test]
fn empty_program_has_no_bindings() {
    let record = assert_success("PROGRAM Empty; BEGIN END.");
    assert_eq!(record.members().count(), 0);
}

#[test]
fn duplicate_identifier_is_rejected() {
    let error = assert_failure("PROGRAM D; VAR a, b : INTEGER; VAR a : REAL; BEGIN END.");
    assert!(matches!(error,
                     Error::Semantic(SemanticError::DuplicateIdentifier { ref name, position })
                     if name == "a" && position.line == 1 && position.column == 36));
}

#[test]
fn undefined_identifier_is_rejected() {
    let error = assert_failure("PROGRAM U; VAR b : INTEGER; BEGIN b := 2 + a END.");
    assert!(matches!(error,
                     Error::Semantic(SemanticError::UndefinedIdentifier { ref name, position })
                     if name == "a" && position.column == 44));
}

#[test]
fn unassigned_variable_fails_at_runtime() {
    let error = assert_failure("PROGRAM U; VAR a, b : INTEGER; BEGIN b := a END.");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "a"));
}

#[test]
fn unassigned_enclosing_variable_fails_at_runtime() {
    let error = assert_failure("PROGRAM U; VAR total : INTEGER;
                                PROCEDURE Outer; VAR hidden : INTEGER;
                                   PROCEDURE Inner; BEGIN total := hidden END;
                                BEGIN Inner() END;
                                BEGIN Outer() END.");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. })
                     if name == "hidden"));
}

#[test]
fn arithmetic_faults_are_errors() {
    assert!(matches!(assert_failure("PROGRAM Z; VAR x : REAL; BEGIN x := 1 / 0 END."),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("PROGRAM Z; VAR x : REAL; BEGIN x := 1.5 / 0.0 END."),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("PROGRAM Z; VAR x : INTEGER; BEGIN x := 1 DIV 0 END."),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("PROGRAM Z; VAR x : INTEGER; BEGIN x := 1 DIV 0.5 END."),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("PROGRAM O; VAR x : INTEGER; \
                                     BEGIN x := 9223372036854775807 + 1 END."),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("PROGRAM O; VAR x : INTEGER; \
                                     BEGIN x := 3037000500 * 3037000500 END."),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn lexical_errors_surface_through_the_pipeline() {
    assert!(matches!(assert_failure("PROGRAM L; BEGIN x := 1 ? 2 END."),
                     Error::Lexical(_)));
    assert!(matches!(assert_failure("PROGRAM L; VAR x : INTEGER; \
                                     BEGIN x := 99999999999999999999 END."),
                     Error::Lexical(_)));
}

#[test]
fn syntax_errors_stop_before_analysis() {
    // 'y' is undeclared, but the missing semicolon is found first.
    assert!(matches!(assert_failure("PROGRAM S BEGIN y := 1 END."),
                     Error::Syntax(_)));
    assert!(matches!(assert_failure("PROGRAM S; BEGIN END"), Error::Syntax(_)));
    assert!(matches!(assert_failure("PROGRAM S; BEGIN END. BEGIN"), Error::Syntax(_)));
}

#[test]
fn semantic_errors_stop_before_execution() {
    // The division by zero never runs.
    let error = assert_failure("PROGRAM S; VAR x : REAL; BEGIN x := 1 / 0; y := 1 END.");
    assert!(matches!(error, Error::Semantic(_)));
}

#[test]
fn errors_carry_stage_and_position() {
    let error = assert_failure("PROGRAM E;\nBEGIN\n  missing := 1\nEND.");
    assert_eq!(error.position().line, 3);
    assert_eq!(error.position().column, 3);
    assert_eq!(error.to_string(),
               "Semantic error on line 3, column 3: Identifier not found: 'missing'.");
}
