use thiserror::Error;

use crate::interpreter::lexer::TokenCategory;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start an operand.
    #[error("Unexpected token '{lexeme}' ({category}) at position {position}.")]
    UnexpectedToken {
        /// The token text.
        lexeme:   String,
        /// The token category.
        category: TokenCategory,
        /// Character offset in the original input.
        position: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Expected {expected} but found {}.", describe_found(.found))]
    ExpectedButFound {
        /// The category that was required.
        expected: TokenCategory,
        /// The category found instead, or `None` at the end of input.
        found:    Option<TokenCategory>,
        /// Character offset of the found token, if any.
        position: Option<usize>,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression, starting with '{lexeme}' at position {position}.")]
    TrailingTokens {
        /// The first unconsumed token.
        lexeme:   String,
        /// Character offset in the original input.
        position: usize,
    },
    /// The input ended where an operand was required.
    #[error("Incomplete expression.")]
    IncompleteExpression,
}

impl ParseError {
    /// Whether the error was caused by the input ending too early.
    ///
    /// ## Example
    /// ```
    /// use trigcalc::{error::ParseError, interpreter::lexer::TokenCategory};
    ///
    /// let missing_paren = ParseError::ExpectedButFound { expected: TokenCategory::RParen,
    ///                                                    found:    None,
    ///                                                    position: None, };
    /// assert!(missing_paren.is_incomplete());
    /// assert!(ParseError::IncompleteExpression.is_incomplete());
    /// ```
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self,
                 Self::IncompleteExpression | Self::ExpectedButFound { found: None, .. })
    }
}

#[allow(clippy::ref_option)]
fn describe_found(found: &Option<TokenCategory>) -> String {
    found.map_or_else(|| "the end of the expression".to_string(), |category| category.to_string())
}
