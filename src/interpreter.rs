/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree produced by the parser, looks variables up in
/// a binding table supplied by the caller, applies arithmetic operators and
/// trigonometric functions, and reports runtime failures.
///
/// # Responsibilities
/// - Evaluates every node kind with exhaustive matching.
/// - Resolves variables against [`evaluator::bindings::VariableBindings`].
/// - Reports undefined variables and division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer (scanner) reads the raw text and produces the token sequence:
/// numbers, variable names, function keywords, operators and parentheses.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Strips whitespace and records the original position of every token.
/// - Validates numeric literals with a finite-state automaton.
/// - Reports unrecognized characters and malformed numbers.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent, LL(1) parser with one function per
/// grammar level. It owns operator precedence and associativity and exposes
/// the variables a tree refers to.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::SyntaxTree`] nodes.
/// - Validates the grammar, reporting errors with token positions.
/// - Lists the distinct variable names a caller has to bind.
pub mod parser;
