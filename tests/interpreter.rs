use pascalina::{
    analyze,
    error::{Error, RuntimeError},
    interpret, interpret_with_options,
    interpreter::{
        call_stack::{ActivationRecord, CallStack, RecordKind},
        evaluator::core::{Interpreter, InterpreterOptions, MAX_CALL_DEPTH},
        value::Value,
    },
    parse, run_program_with_options,
};

const RUNAWAY: &str = "PROGRAM R; VAR depth : INTEGER;
                       PROCEDURE Loop(n : INTEGER); BEGIN depth := n; Loop(n + 1) END;
                       BEGIN Loop(1) END.";

#[test]
fn record_display_lists_sorted_members() {
    let mut record = ActivationRecord::new("Main", RecordKind::Program, 1, None);
    record.set("y", Value::Real(2.5));
    record.set("a", Value::Integer(2));

    assert_eq!(record.to_string(),
               format!("1: PROGRAM Main\n   {:<20}: 2\n   {:<20}: 2.5", "a", "y"));
}

#[test]
fn call_stack_display_lists_top_first() {
    let mut stack = CallStack::new();
    assert!(stack.is_empty());
    stack.push(ActivationRecord::new("Main", RecordKind::Program, 1, None));
    stack.push(ActivationRecord::new("Alpha", RecordKind::Procedure, 2, Some(0)));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek().map(ActivationRecord::name), Some("Alpha"));
    assert_eq!(stack.to_string(), "CALL STACK\n2: PROCEDURE Alpha\n1: PROGRAM Main");
}

#[test]
fn interpreter_keeps_the_program_record() {
    let program = parse("PROGRAM Keep; VAR x : INTEGER; BEGIN x := 3 END.").unwrap();
    let analysis = analyze(&program).unwrap();
    let mut interpreter = Interpreter::new(&analysis);

    assert!(interpreter.program_record().is_none());
    interpreter.run(&program).unwrap();

    assert!(interpreter.call_stack().is_empty());
    let record = interpreter.program_record().unwrap();
    assert_eq!(record.name(), "Keep");
    assert_eq!(record.kind(), RecordKind::Program);
    assert_eq!(record.static_link(), None);
    assert_eq!(record.get("x"), Some(Value::Integer(3)));
}

#[test]
fn call_stack_is_unwound_after_a_failure() {
    let program = parse("PROGRAM F; VAR x : INTEGER;
                         PROCEDURE Boom; BEGIN x := 1 DIV 0 END;
                         BEGIN x := 7; Boom() END.").unwrap();
    let analysis = analyze(&program).unwrap();
    let mut interpreter = Interpreter::new(&analysis);

    assert!(matches!(interpreter.run(&program), Err(RuntimeError::DivisionByZero { .. })));
    assert!(interpreter.call_stack().is_empty());
    // Bindings made before the failure are still inspectable.
    assert_eq!(interpreter.program_record().and_then(|r| r.get("x")),
               Some(Value::Integer(7)));
}

#[test]
fn call_depth_is_bounded() {
    let options = InterpreterOptions { max_call_depth: 10 };
    let error = run_program_with_options(RUNAWAY, options).unwrap_err();

    assert!(matches!(error,
                     Error::Runtime(RuntimeError::CallDepthExceeded { limit: 10, .. })));
}

#[test]
fn default_call_depth() {
    assert_eq!(InterpreterOptions::default().max_call_depth, MAX_CALL_DEPTH);

    let program = parse(RUNAWAY).unwrap();
    let analysis = analyze(&program).unwrap();
    assert!(matches!(interpret(&program, &analysis),
                     Err(RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH, .. })));
}

#[test]
fn calls_up_to_the_limit_succeed() {
    let program = parse("PROGRAM C; VAR hits : INTEGER;
                         PROCEDURE A; BEGIN hits := hits + 1 END;
                         PROCEDURE B; BEGIN hits := hits + 1; A() END;
                         BEGIN hits := 0; B(); A() END.").unwrap();
    let analysis = analyze(&program).unwrap();

    let record = interpret_with_options(&program,
                                        &analysis,
                                        InterpreterOptions { max_call_depth: 2 }).unwrap();
    assert_eq!(record.get("hits"), Some(Value::Integer(3)));

    assert!(matches!(interpret_with_options(&program,
                                            &analysis,
                                            InterpreterOptions { max_call_depth: 1 }),
                     Err(RuntimeError::CallDepthExceeded { .. })));
}

#[test]
fn recursive_calls_link_to_the_declaring_scope() {
    // Each recursive activation of Step must find 'limit' in the program
    // record, not in the previous activation.
    let program = parse("PROGRAM Rec; VAR limit, last : INTEGER;
                         PROCEDURE Step(n : INTEGER);
                            PROCEDURE Remember; BEGIN last := n END;
                         BEGIN Remember(); Step(n + limit) END;
                         BEGIN limit := 3; Step(1) END.").unwrap();
    let analysis = analyze(&program).unwrap();
    let mut interpreter = Interpreter::with_options(&analysis,
                                                    InterpreterOptions { max_call_depth: 6 });

    assert!(matches!(interpreter.run(&program),
                     Err(RuntimeError::CallDepthExceeded { .. })));
    // The k-th Step runs at depth k with n = 1 + 3 * (k - 1), and its Remember
    // one deeper. With a limit of 6 the last Remember to run belongs to the
    // fifth Step.
    assert_eq!(interpreter.program_record().and_then(|r| r.get("last")),
               Some(Value::Integer(13)));
}

#[test]
fn unanalyzed_call_is_reported() {
    let program = parse("PROGRAM U; PROCEDURE P; BEGIN END; BEGIN P() END.").unwrap();
    let other = parse("PROGRAM Other; BEGIN END.").unwrap();
    let analysis = analyze(&other).unwrap();

    assert!(matches!(interpret(&program, &analysis),
                     Err(RuntimeError::UnresolvedProcedure { ref name, .. }) if name == "P"));
}
