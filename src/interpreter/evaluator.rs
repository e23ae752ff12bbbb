/// Core evaluation logic.
///
/// Walks a syntax tree and computes its value, resolving variables against a
/// binding table and reporting division by zero and undefined variables.
pub mod core;

/// The variable binding table.
///
/// Maps variable names to values. The table is filled by the caller, for
/// example from command-line arguments, before evaluation starts.
pub mod bindings;
