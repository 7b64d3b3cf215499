use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Position,
        value::Value,
    },
};

impl Interpreter<'_, '_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// `+`, `-` and `*` keep integers integral and promote to real as soon
    /// as either operand is real. `/` always produces a real. `DIV`
    /// truncates both operands to integers, then divides truncating toward
    /// zero.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Errors
    /// - `RuntimeError::Overflow` when integer arithmetic overflows.
    /// - `RuntimeError::DivisionByZero` for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use pascalina::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, lexer::Position, value::Value},
    /// };
    ///
    /// let position = Position::new(1, 1);
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    Value::Integer(2),
    ///                                    Value::Real(0.5),
    ///                                    position).unwrap();
    /// assert_eq!(sum, Value::Real(2.5));
    ///
    /// let quotient = Interpreter::eval_binary(BinaryOperator::IntegerDiv,
    ///                                         Value::Integer(-7),
    ///                                         Value::Integer(2),
    ///                                         position).unwrap();
    /// assert_eq!(quotient, Value::Integer(-3));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, IntegerDiv, Mul, RealDiv, Sub};
        use Value::{Integer, Real};

        let overflow = RuntimeError::Overflow { position };

        match (op, left, right) {
            (Add, Integer(l), Integer(r)) => l.checked_add(r).map(Integer).ok_or(overflow),
            (Sub, Integer(l), Integer(r)) => l.checked_sub(r).map(Integer).ok_or(overflow),
            (Mul, Integer(l), Integer(r)) => l.checked_mul(r).map(Integer).ok_or(overflow),
            (Add, _, _) => Ok(Real(left.as_real() + right.as_real())),
            (Sub, _, _) => Ok(Real(left.as_real() - right.as_real())),
            (Mul, _, _) => Ok(Real(left.as_real() * right.as_real())),
            (RealDiv, _, _) => {
                let left = left.as_real();
                let right = right.as_real();
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(Real(left / right))
            },
            (IntegerDiv, _, _) => {
                let left = left.as_integer(position)?;
                let right = right.as_integer(position)?;
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right).map(Integer).ok_or(overflow)
            },
        }
    }
}
