use std::iter::Peekable;

use crate::{
    ast::{Function, SyntaxTree},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenCategory},
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := function "(" expression ")"
///              | "(" expression ")"
///              | number
///              | identifier
/// ```
///
/// # Errors
/// - `ParseError::IncompleteExpression` if the input is exhausted.
/// - `ParseError::UnexpectedToken` if the next token cannot start an operand.
/// - Errors from the nested expression or a missing parenthesis.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    let token = *tokens.peek().ok_or(ParseError::IncompleteExpression)?;

    match (token.category(), token.value()) {
        (category, _) if category.is_function() => parse_call(tokens),
        (TokenCategory::LParen, _) => parse_grouping(tokens),
        (TokenCategory::Number, Some(value)) => {
            tokens.next();
            Ok(SyntaxTree::Constant(value))
        },
        (TokenCategory::Identifier, _) => {
            tokens.next();
            Ok(SyntaxTree::VariableRef(token.lexeme().to_string()))
        },
        (category, _) => Err(ParseError::UnexpectedToken { lexeme: token.lexeme().to_string(),
                                                           category,
                                                           position: token.position() }),
    }
}

/// Parses `function "(" expression ")"`.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    let name = tokens.next().ok_or(ParseError::IncompleteExpression)?;
    let function = Function::from_category(name.category()).ok_or_else(|| {
                       ParseError::UnexpectedToken { lexeme:   name.lexeme().to_string(),
                                                     category: name.category(),
                                                     position: name.position(), }
                   })?;

    expect(tokens, TokenCategory::LParen)?;
    let argument = parse_expression(tokens)?;
    expect(tokens, TokenCategory::RParen)?;

    Ok(SyntaxTree::call(function, argument))
}

/// Parses `"(" expression ")"`, returning the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SyntaxTree>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenCategory::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenCategory::RParen)?;
    Ok(expr)
}
