/// Parser entry points, the shared cursor helpers and variable discovery.
pub mod core;

/// Binary operator productions.
///
/// Implements the three precedence levels of the grammar: `+ -`, then
/// `* /`, then `^`. The first two fold left, exponentiation folds right.
pub mod binary;

/// Operand productions.
///
/// Parses function calls, parenthesized expressions, numbers and variables,
/// the atoms that binary operators combine.
pub mod primary;
