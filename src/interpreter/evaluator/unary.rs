use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Position,
        value::Value,
    },
};

impl Interpreter<'_, '_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Both operators keep the kind of their operand.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use pascalina::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, lexer::Position, value::Value},
    /// };
    ///
    /// let position = Position::new(1, 1);
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, Value::Integer(5), position).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Plus, Value::Real(1.5), position).unwrap();
    /// assert_eq!(v, Value::Real(1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, _) => Ok(value),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
        }
    }
}
