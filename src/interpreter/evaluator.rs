/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its options, statement execution and
/// variable access through the call stack.
pub mod core;

/// Binary operator evaluation logic.
///
/// Integer and real arithmetic with promotion, and the two division
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Procedure calls.
///
/// Argument evaluation, activation record setup with its static link, and
/// execution of the callee body.
pub mod call;
