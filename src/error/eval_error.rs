use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable with no value in the binding table.
    #[error("Undefined variable: {name}.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of `/` evaluated to zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Text that names no binary operator.
    #[error("Unknown operator: {operator}.")]
    UnknownOperator {
        /// The offending operator text.
        operator: String,
    },
    /// Text that names no supported function.
    #[error("Unknown function: {name}.")]
    UnknownFunction {
        /// The offending function name.
        name: String,
    },
}
