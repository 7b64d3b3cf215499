use crate::{
    ast::LiteralValue,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Every variable binding and every evaluated expression holds one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`. Integers are promoted to the nearest
    /// real.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => i64_to_f64(n),
        }
    }

    /// Converts the value to an `i64`, truncating reals toward zero.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` for a real that is not finite or out
    /// of integer range.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::{lexer::Position, value::Value};
    ///
    /// assert_eq!(Value::Real(-3.7).as_integer(Position::new(1, 1)).unwrap(), -3);
    /// ```
    pub fn as_integer(self, position: Position) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Real(r) => f64_to_i64_truncated(r, position),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug formatting keeps the fraction, so `2.0` stays distinct from `2`.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
