/// Numeric conversion helpers.
///
/// Integer to real promotion, and real to integer truncation that reports
/// loss of range instead of silently saturating.
pub mod num;
