use thiserror::Error;

/// Evaluation errors.
///
/// Contains the errors raised while walking a syntax tree: undefined
/// variables, division by zero and names that do not denote a known operator
/// or function.
pub mod eval_error;
/// Lexing errors.
///
/// Raised by the scanner for characters that start no token and for numeric
/// literals the number automaton rejects.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors detected while building the tree: unexpected
/// tokens, a missing expected token, trailing input and input that ends too
/// early.
pub mod parse_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of the tokenize, parse and evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
