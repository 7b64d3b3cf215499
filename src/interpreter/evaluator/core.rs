use log::{debug, trace};

use crate::{
    ast::{Assign, Block, Compound, Expr, Program, Statement, Var},
    error::RuntimeError,
    interpreter::{
        call_stack::{ActivationRecord, CallStack, RecordKind},
        semantic::{analyzer::Analysis, scope::GLOBAL_LEVEL},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on the number of procedure records active at once.
pub const MAX_CALL_DEPTH: usize = 128;

/// Tunables for a single interpreter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Maximum number of procedure calls that may be active at once. One
    /// more nested call raises [`RuntimeError::CallDepthExceeded`].
    pub max_call_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self { max_call_depth: MAX_CALL_DEPTH }
    }
}

/// Executes an analyzed program.
///
/// The interpreter only runs trees that passed semantic analysis; the
/// [`Analysis`] tells it which procedure each call refers to and at which
/// nesting level each variable lives.
///
/// ## Usage
///
/// Create one interpreter per run, call [`Interpreter::run`], then inspect
/// the final bindings through [`Interpreter::program_record`].
pub struct Interpreter<'a, 'ast> {
    pub(super) analysis:   &'a Analysis<'ast>,
    pub(super) call_stack: CallStack,
    pub(super) options:    InterpreterOptions,
    finished:              Option<ActivationRecord>,
}

impl<'a, 'ast> Interpreter<'a, 'ast> {
    /// Creates an interpreter with default options.
    #[must_use]
    pub fn new(analysis: &'a Analysis<'ast>) -> Self {
        Self::with_options(analysis, InterpreterOptions::default())
    }

    /// Creates an interpreter with the given options.
    #[must_use]
    pub const fn with_options(analysis: &'a Analysis<'ast>, options: InterpreterOptions) -> Self {
        Self { analysis,
               call_stack: CallStack::new(),
               options,
               finished: None }
    }

    /// Runs the program.
    ///
    /// The program record is pushed, the block is executed and the record is
    /// popped again, also when execution fails. The popped record stays
    /// available through [`Interpreter::program_record`].
    ///
    /// # Parameters
    /// - `program`: The same tree that produced the analysis.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised while executing.
    ///
    /// # Example
    /// ```
    /// use pascalina::{
    ///     interpreter::{evaluator::core::Interpreter, semantic::analyzer::analyze, value::Value},
    ///     parse,
    /// };
    ///
    /// let program = parse("PROGRAM P; VAR x : REAL; BEGIN x := 7 / 2 END.").unwrap();
    /// let analysis = analyze(&program).unwrap();
    ///
    /// let mut interpreter = Interpreter::new(&analysis);
    /// interpreter.run(&program).unwrap();
    ///
    /// let record = interpreter.program_record().unwrap();
    /// assert_eq!(record.get("x"), Some(Value::Real(3.5)));
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        let record = ActivationRecord::new(&program.name, RecordKind::Program, GLOBAL_LEVEL, None);
        self.call_stack.push(record);
        debug!("ENTER: PROGRAM {}", program.name);
        trace!("{}", self.call_stack);

        let result = self.visit_block(&program.block);

        trace!("{}", self.call_stack);
        debug!("LEAVE: PROGRAM {}", program.name);
        self.finished = self.call_stack.pop();
        result
    }

    /// The program record left behind by the last [`Interpreter::run`].
    #[must_use]
    pub const fn program_record(&self) -> Option<&ActivationRecord> {
        self.finished.as_ref()
    }

    /// Consumes the interpreter and returns the final program record.
    #[must_use]
    pub fn into_program_record(self) -> Option<ActivationRecord> {
        self.finished
    }

    /// The live call stack. Empty outside of [`Interpreter::run`].
    #[must_use]
    pub const fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Declarations have no runtime effect, so only the statements run.
    pub(super) fn visit_block(&mut self, block: &Block) -> EvalResult<()> {
        self.visit_compound(&block.compound)
    }

    fn visit_compound(&mut self, compound: &Compound) -> EvalResult<()> {
        compound.statements
                .iter()
                .try_for_each(|statement| self.visit_statement(statement))
    }

    fn visit_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound),
            Statement::Assign(assign) => self.visit_assign(assign),
            Statement::ProcedureCall(call) => self.eval_procedure_call(call),
            Statement::NoOp => Ok(()),
        }
    }

    fn visit_assign(&mut self, assign: &Assign) -> EvalResult<()> {
        let value = self.eval(&assign.value)?;
        self.write_variable(&assign.target, value)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right.
    ///
    /// # Errors
    /// Returns an error for unbound variables and arithmetic faults.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Num { value, .. } => Ok(Value::from(*value)),
            Expr::Var(var) => self.read_variable(var),
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }

    /// Finds the call stack index of the record that holds `var`.
    fn locate(&self, var: &Var) -> EvalResult<usize> {
        self.analysis
            .declared_level(var.id)
            .and_then(|level| self.call_stack.resolve(level))
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:     var.name.clone(),
                                                             position: var.position, })
    }

    fn read_variable(&self, var: &Var) -> EvalResult<Value> {
        let index = self.locate(var)?;
        self.call_stack
            .get(index)
            .and_then(|record| record.get(&var.name))
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:     var.name.clone(),
                                                             position: var.position, })
    }

    fn write_variable(&mut self, var: &Var, value: Value) -> EvalResult<()> {
        let index = self.locate(var)?;
        let record = self.call_stack
                         .get_mut(index)
                         .ok_or_else(|| RuntimeError::UndefinedVariable { name:
                                                                              var.name.clone(),
                                                                          position:
                                                                              var.position, })?;
        record.set(&var.name, value);
        Ok(())
    }
}
