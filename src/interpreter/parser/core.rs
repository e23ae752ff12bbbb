use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::SyntaxTree,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenCategory},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a syntax tree.
///
/// The cursor lives only for the duration of the call, so parsing the same
/// tokens again always yields an identical tree.
///
/// # Errors
/// - Any error raised by the grammar productions.
/// - `ParseError::TrailingTokens` if tokens remain after the expression.
///
/// ## Example
/// ```
/// use trigcalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("8 / 4 / 2").unwrap();
/// assert_eq!(parse(&tokens).unwrap().to_string(), "((8 / 4) / 2)");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<SyntaxTree> {
    let mut cursor = tokens.iter().peekable();
    let tree = parse_expression(&mut cursor)?;

    if let Some(token) = cursor.next() {
        return Err(ParseError::TrailingTokens { lexeme:   token.lexeme().to_string(),
                                                position: token.position(), });
    }

    debug!(tree = %tree, "parsed expression");
    Ok(tree)
}

/// Parses the tokens and also returns the variables the tree refers to, in
/// first-occurrence order.
///
/// A caller uses the names to build a complete binding table before
/// evaluating.
pub fn parse_with_variables(tokens: &[Token]) -> ParseResult<(SyntaxTree, Vec<String>)> {
    let tree = parse(tokens)?;
    let variables = free_variables(&tree);
    Ok((tree, variables))
}

/// Returns the distinct variable names of `tree` in first-occurrence order.
#[must_use]
pub fn free_variables(tree: &SyntaxTree) -> Vec<String> {
    tree.variables().into_iter().map(str::to_string).collect()
}

/// Parses a full expression.
///
/// This is the start symbol of the grammar; it begins at the lowest
/// precedence level.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Consumes the next token if it has the `expected` category.
///
/// # Errors
/// Returns `ParseError::ExpectedButFound` without consuming anything if the
/// next token differs or the input is exhausted.
pub(crate) fn expect<'a, I>(tokens: &mut Peekable<I>,
                            expected: TokenCategory)
                            -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|token| token.category() == expected) {
        return Ok(token);
    }

    let found = tokens.peek();
    Err(ParseError::ExpectedButFound { expected,
                                       found: found.map(|token| token.category()),
                                       position: found.map(|token| token.position()) })
}
