use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, SyntaxTree},
    interpreter::{
        lexer::{Token, TokenCategory},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative operators `+` and `-`. Each operator folds
/// the tree built so far in as its left operand, so `3-2-1` is `(3-2)-1`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let right = parse_multiplicative(tokens)?;
        left = SyntaxTree::binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Left-associative like [`parse_additive`]: `8/4/2` is `(8/4)/2`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_exponent(tokens)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div]) {
        let right = parse_exponent(tokens)?;
        left = SyntaxTree::binary(op, left, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Handles repeated exponentiation with right-associativity:
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `exponent := primary ("^" exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    let base = parse_primary(tokens)?;
    parse_exponent_tail(tokens, base)
}

/// Folds any remaining `^ primary` pairs into the right operand before
/// building the node for `inherited`.
fn parse_exponent_tail<'a, I>(tokens: &mut Peekable<I>,
                              inherited: SyntaxTree)
                              -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    if next_operator(tokens, &[BinaryOperator::Pow]).is_none() {
        return Ok(inherited);
    }
    let exponent = parse_primary(tokens)?;
    let exponent = parse_exponent_tail(tokens, exponent)?;
    Ok(SyntaxTree::binary(BinaryOperator::Pow, inherited, exponent))
}

/// Consumes the next token if it is one of the `allowed` operators.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        allowed: &[BinaryOperator])
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    let op = tokens.peek()
                   .and_then(|token| token_to_binary_operator(token.category()))
                   .filter(|op| allowed.contains(op))?;
    tokens.next();
    trace!(%op, "binary operator");
    Some(op)
}

/// Maps a token category to its corresponding binary operator.
///
/// Returns `None` for categories that are not binary operators.
///
/// # Example
/// ```
/// use trigcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenCategory, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenCategory::Power), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenCategory::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(category: TokenCategory) -> Option<BinaryOperator> {
    match category {
        TokenCategory::Plus => Some(BinaryOperator::Add),
        TokenCategory::Minus => Some(BinaryOperator::Sub),
        TokenCategory::Multiply => Some(BinaryOperator::Mul),
        TokenCategory::Divide => Some(BinaryOperator::Div),
        TokenCategory::Power => Some(BinaryOperator::Pow),
        _ => None,
    }
}
