use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, SyntaxTree},
    error::EvalError,
    interpreter::evaluator::bindings::VariableBindings,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates `tree` with the variable values in `bindings`.
///
/// # Errors
/// - `EvalError::UndefinedVariable` for the first variable, in left-to-right
///   order, that has no binding.
/// - `EvalError::DivisionByZero` if a divisor evaluates to zero.
///
/// ## Example
/// ```
/// use trigcalc::interpreter::{
///     evaluator::{bindings::VariableBindings, core::evaluate},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let tree = parse(&tokenize("x + y").unwrap()).unwrap();
/// let bindings: VariableBindings = [("x", 3.0), ("y", 5.0)].into_iter().collect();
///
/// assert_eq!(evaluate(&tree, &bindings).unwrap(), 8.0);
/// ```
pub fn evaluate(tree: &SyntaxTree, bindings: &VariableBindings) -> EvalResult<f64> {
    let value = Context::new(bindings).eval(tree)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

/// The evaluation context: the binding table a tree is evaluated against.
///
/// A context only borrows the bindings, so the same tree can be evaluated
/// against different tables without any state carried between runs.
#[derive(Debug, Clone, Copy)]
pub struct Context<'b> {
    bindings: &'b VariableBindings,
}

impl<'b> Context<'b> {
    #[must_use]
    pub const fn new(bindings: &'b VariableBindings) -> Self {
        Self { bindings }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Binary operands are evaluated left before right and both are always
    /// evaluated.
    pub fn eval(&self, tree: &SyntaxTree) -> EvalResult<f64> {
        match tree {
            SyntaxTree::Constant(value) => Ok(*value),
            SyntaxTree::VariableRef(name) => self.eval_variable(name),
            SyntaxTree::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            SyntaxTree::Call { function, argument } => {
                let argument = self.eval(argument)?;
                let value = function.apply(argument);
                trace!(%function, argument, value, "call");
                Ok(value)
            },
        }
    }

    /// Looks a variable up in the binding table.
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.bindings
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Exponentiation is `f64::powf`; a negative base with a fractional
    /// exponent yields NaN.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0),
    ///            Err(EvalError::DivisionByZero));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div if right == 0.0 => Err(EvalError::DivisionByZero),
            BinaryOperator::Div => Ok(left / right),
            BinaryOperator::Pow => Ok(left.powf(right)),
        }
    }
}
