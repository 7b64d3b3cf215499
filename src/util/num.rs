use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
};

/// Promotes an `i64` to the nearest `f64`.
///
/// Magnitudes beyond `2^53` round to the closest representable real, as
/// mixed arithmetic expects.
///
/// # Example
/// ```
/// use pascalina::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// # Parameters
/// - `value`: The real to convert.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// - `Ok(i64)`: The integral part of `value`.
/// - `Err(RuntimeError::Overflow)`: If `value` is not finite or its integral
///   part does not fit in an `i64`.
///
/// # Example
/// ```
/// use pascalina::{
///     error::RuntimeError,
///     interpreter::lexer::Position,
///     util::num::f64_to_i64_truncated,
/// };
///
/// let position = Position::new(1, 1);
/// assert_eq!(f64_to_i64_truncated(7.9, position), Ok(7));
/// assert_eq!(f64_to_i64_truncated(-7.9, position), Ok(-7));
/// assert_eq!(f64_to_i64_truncated(f64::NAN, position),
///            Err(RuntimeError::Overflow { position }));
/// assert!(f64_to_i64_truncated(1e20, position).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, position: Position) -> EvalResult<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { position });
    }
    Ok(truncated as i64)
}
