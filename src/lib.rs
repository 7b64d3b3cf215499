//! # pascalina
//!
//! pascalina is an interpreter for a small Pascal-like language written in
//! Rust. Programs are tokenized, parsed into an abstract syntax tree,
//! checked by a semantic analyzer and then executed by a tree-walking
//! interpreter with a call stack of activation records.
//!
//! The stages are available separately through [`parse`], [`analyze`] and
//! [`interpret`], or together through [`run_program`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, SyntaxError},
    interpreter::{
        call_stack::{ActivationRecord, RecordKind},
        evaluator::core::{EvalResult, Interpreter, InterpreterOptions},
        lexer::tokenize,
        semantic::scope::GLOBAL_LEVEL,
    },
};
pub use crate::interpreter::semantic::analyzer::{Analysis, analyze};

/// Defines the structure of parsed code.
///
/// This module declares the program, declaration, statement and expression
/// types that represent source code as a tree. The AST is built by the
/// parser, checked by the semantic analyzer and traversed by the evaluator;
/// it is never modified after parsing.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source positions to nodes for error reporting.
/// - Gives variable and call nodes stable ids for side tables.
pub mod ast;
/// Provides unified error types for every stage of the pipeline.
///
/// Each stage has its own error enum carrying a source position; the
/// top-level `Error` wraps them so the full pipeline composes with `?`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, analyzer,
///   evaluator).
/// - Attaches line and column numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and the runtime data structures.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Parses source text into a program tree.
///
/// # Errors
/// Returns a [`SyntaxError`], which wraps any lexical error met while
/// pulling tokens.
///
/// # Examples
/// ```
/// use pascalina::parse;
///
/// let program = parse("program Demo; begin end.").unwrap();
/// assert_eq!(program.name, "Demo");
/// ```
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    interpreter::parser::core::parse(tokenize(source))
}

/// Runs an analyzed program with default options and returns its final
/// program record.
///
/// # Errors
/// Returns the first runtime error raised by the program.
pub fn interpret(program: &Program, analysis: &Analysis<'_>) -> EvalResult<ActivationRecord> {
    interpret_with_options(program, analysis, InterpreterOptions::default())
}

/// Like [`interpret`], with explicit interpreter options.
///
/// # Errors
/// Returns the first runtime error raised by the program.
pub fn interpret_with_options(program: &Program,
                              analysis: &Analysis<'_>,
                              options: InterpreterOptions)
                              -> EvalResult<ActivationRecord> {
    let mut interpreter = Interpreter::with_options(analysis, options);
    interpreter.run(program)?;

    // `run` always leaves the popped program record behind.
    Ok(interpreter.into_program_record().unwrap_or_else(|| {
                                             ActivationRecord::new(&program.name,
                                                                   RecordKind::Program,
                                                                   GLOBAL_LEVEL,
                                                                   None)
                                         }))
}

/// Returns the final program record after running the whole pipeline.
///
/// The source is parsed, analyzed and only then executed; nothing runs if
/// an earlier stage fails.
///
/// # Errors
/// Returns the first error of whichever stage failed.
///
/// # Examples
/// ```
/// use pascalina::{interpreter::value::Value, run_program};
///
/// let record = run_program("PROGRAM T; VAR a : INTEGER; BEGIN a := 10 DIV 4 END.").unwrap();
/// assert_eq!(record.get("a"), Some(Value::Integer(2)));
///
/// // 'b' is never declared.
/// assert!(run_program("PROGRAM T; VAR a : INTEGER; BEGIN b := 1 END.").is_err());
/// ```
pub fn run_program(source: &str) -> Result<ActivationRecord, Error> {
    run_program_with_options(source, InterpreterOptions::default())
}

/// Like [`run_program`], with explicit interpreter options.
///
/// # Errors
/// Returns the first error of whichever stage failed.
pub fn run_program_with_options(source: &str,
                                options: InterpreterOptions)
                                -> Result<ActivationRecord, Error> {
    let program = parse(source)?;
    let analysis = analyze(&program)?;
    Ok(interpret_with_options(&program, &analysis, options)?)
}
