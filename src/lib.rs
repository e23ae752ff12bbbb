//! # trigcalc
//!
//! trigcalc parses and evaluates arithmetic and trigonometric expressions
//! over real numbers. Expressions may use `+ - * / ^`, parentheses, the
//! functions `sin`, `cos` and `tan`, and named variables whose values are
//! supplied when the expression is evaluated.
//!
//! The pipeline has three stages, each usable on its own:
//! [`interpreter::lexer::tokenize`], [`interpreter::parser::core::parse`] and
//! [`interpreter::evaluator::core::evaluate`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::SyntaxTree,
    error::Error,
    interpreter::{
        evaluator::{bindings::VariableBindings, core::evaluate},
        lexer::{Token, tokenize},
        parser::core::parse_with_variables,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `SyntaxTree` enum and the operator and function
/// types it is built from. The tree is built by the parser and traversed by
/// the evaluator and by the renderers.
///
/// # Responsibilities
/// - Defines the node variants: constants, variables, binary operations and
///   function calls.
/// - Lists the variables a tree refers to.
/// - Renders trees as infix text or as an indented diagram.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Every error carries the structured data needed to describe it (the
/// offending character, its position, the expected and found token
/// categories, the undefined name) and implements `std::error::Error`.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Combines them into [`error::Error`] for the full pipeline.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together the lexer, the parser and the evaluator.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides the entry point of each stage.
pub mod interpreter;

/// Everything known about an expression before evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The token sequence of the expression.
    pub tokens:    Vec<Token>,
    /// The syntax tree.
    pub tree:      SyntaxTree,
    /// Distinct variable names in first-occurrence order.
    pub variables: Vec<String>,
}

/// Tokenizes and parses an expression without evaluating it.
///
/// # Errors
/// Returns a lexing or parsing error.
///
/// # Examples
/// ```
/// use trigcalc::analyze;
///
/// let analysis = analyze("sin(x) + cos(y) * x").unwrap();
/// assert_eq!(analysis.variables, ["x", "y"]);
/// ```
pub fn analyze(source: &str) -> Result<Analysis, Error> {
    let tokens = tokenize(source)?;
    let (tree, variables) = parse_with_variables(&tokens)?;
    debug!(?variables, "analyzed expression");
    Ok(Analysis { tokens,
                  tree,
                  variables })
}

/// Returns the value of an expression.
///
/// This function tokenizes, parses and evaluates `source` using the
/// variable values in `bindings`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use trigcalc::{get_result, interpreter::evaluator::bindings::VariableBindings};
///
/// // Precedence: multiplication binds tighter than addition.
/// let res = get_result("3 + 4 * 2", &VariableBindings::new());
/// assert_eq!(res.unwrap(), 11.0);
///
/// // Example with an intentional error (unbound variable).
/// let res = get_result("x + 1", &VariableBindings::new());
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, bindings: &VariableBindings) -> Result<f64, Error> {
    let analysis = analyze(source)?;
    Ok(evaluate(&analysis.tree, bindings)?)
}
