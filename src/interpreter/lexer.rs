use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::error::LexError;

/// The finite-state validator for numeric literals.
///
/// Every candidate literal the scanner finds is checked here before it
/// becomes a `Number` token, so malformed text such as `5..3` or `2e` is
/// rejected during lexing with the position of the literal.
pub mod number;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// The classified kind of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// `sin` and its spelling variants.
    Sin,
    /// `cos` and its spelling variants.
    Cos,
    /// `tan` and its spelling variants.
    Tan,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Numeric literal tokens, such as `3.14`, `.5`, `-2` or `2.1e-10`.
    Number,
    /// Variable names such as `x` or `theta`.
    Identifier,
}

impl TokenCategory {
    /// Whether the category names a trigonometric function.
    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Whether a token of this category can end an operand.
    ///
    /// A `-` directly after such a token is always binary subtraction.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::Identifier | Self::RParen)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sin => "Sin",
            Self::Cos => "Cos",
            Self::Tan => "Tan",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::Number => "Number",
            Self::Identifier => "Identifier",
        };
        write!(f, "{name}")
    }
}

/// A lexical token.
///
/// `value` is present exactly when the category is [`TokenCategory::Number`];
/// the constructors are the only way to build a token, which keeps that true.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    lexeme:   String,
    category: TokenCategory,
    value:    Option<f64>,
    position: usize,
}

impl Token {
    /// Creates a numeric literal token.
    #[must_use]
    pub fn number(lexeme: impl Into<String>, value: f64, position: usize) -> Self {
        Self { lexeme: lexeme.into(),
               category: TokenCategory::Number,
               value: Some(value),
               position }
    }

    /// Creates a token for a word, classifying it through the keyword table.
    ///
    /// ## Example
    /// ```
    /// use trigcalc::interpreter::lexer::{Token, TokenCategory};
    ///
    /// assert_eq!(Token::word("sen", 0).category(), TokenCategory::Sin);
    /// assert_eq!(Token::word("theta", 0).category(), TokenCategory::Identifier);
    /// ```
    #[must_use]
    pub fn word(lexeme: impl Into<String>, position: usize) -> Self {
        let lexeme = lexeme.into();
        let category = keyword(&lexeme).unwrap_or(TokenCategory::Identifier);
        Self { lexeme,
               category,
               value: None,
               position }
    }

    /// Creates an operator or parenthesis token.
    ///
    /// Returns `None` if `symbol` is not one of `+ - * / ^ ( )`.
    #[must_use]
    pub fn symbol(symbol: char, position: usize) -> Option<Self> {
        let category = match symbol {
            '+' => TokenCategory::Plus,
            '-' => TokenCategory::Minus,
            '*' => TokenCategory::Multiply,
            '/' => TokenCategory::Divide,
            '^' => TokenCategory::Power,
            '(' => TokenCategory::LParen,
            ')' => TokenCategory::RParen,
            _ => return None,
        };
        Some(Self { lexeme: symbol.to_string(),
                    category,
                    value: None,
                    position })
    }

    /// The raw text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[must_use]
    pub const fn category(&self) -> TokenCategory {
        self.category
    }

    /// The numeric value of a `Number` token.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Character offset of the token in the original input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Looks a word up in the table of reserved function names.
///
/// Lowercase, capitalized and uppercase spellings are accepted, as is the
/// Spanish `sen` for sine.
#[must_use]
pub fn keyword(word: &str) -> Option<TokenCategory> {
    match word {
        "sin" | "Sin" | "SIN" | "sen" | "Sen" | "SEN" => Some(TokenCategory::Sin),
        "cos" | "Cos" | "COS" => Some(TokenCategory::Cos),
        "tan" | "Tan" | "TAN" => Some(TokenCategory::Tan),
        _ => None,
    }
}

/// Raw lexemes recognized over whitespace-free input.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Candidate numeric literal; validated by [`number::parse_number`].
    #[regex(r"[0-9.]+([eE][+-]?[0-9]*)?")]
    Number,
    #[regex(r"\p{L}+")]
    Word,
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    #[token("(")]
    #[token(")")]
    Symbol,
}

/// Converts an expression into its token sequence.
///
/// All whitespace is removed first and carries no meaning. A `-` directly
/// followed by a digit or `.` becomes the sign of that literal unless the
/// previous token ends an operand, so `4-2` is a subtraction while `2*-3` and
/// `(-1)` contain negative literals.
///
/// # Errors
/// - `LexError::UnrecognizedCharacter` for a character that starts no token.
/// - `LexError::MalformedNumber` for a literal rejected by the number
///   automaton.
///
/// ## Example
/// ```
/// use trigcalc::interpreter::lexer::{TokenCategory, tokenize};
///
/// let tokens = tokenize("sin(x) - 2").unwrap();
/// let categories: Vec<_> = tokens.iter().map(|t| t.category()).collect();
///
/// assert_eq!(categories,
///            [TokenCategory::Sin,
///             TokenCategory::LParen,
///             TokenCategory::Identifier,
///             TokenCategory::RParen,
///             TokenCategory::Minus,
///             TokenCategory::Number]);
/// ```
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let (source, origins) = strip_whitespace(input);
    let mut lexer = Lexeme::lexer(&source);
    let mut tokens: Vec<Token> = Vec::new();
    let mut sign_start = None;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let position = origins[span.start];

        let Ok(lexeme) = lexeme else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(LexError::UnrecognizedCharacter { character, position });
        };

        let token = match lexeme {
            Lexeme::Number => {
                let start = sign_start.take().unwrap_or(span.start);
                let text = &source[start..span.end];
                let position = origins[start];
                let value = number::parse_number(text).ok_or_else(|| {
                                                          LexError::MalformedNumber { text: text.to_owned(),
                                                                                      position }
                                                      })?;
                Token::number(text, value, position)
            },
            Lexeme::Word => Token::word(slice, position),
            Lexeme::Symbol => {
                if slice == "-"
                   && starts_number(&source[span.end..])
                   && !tokens.last().is_some_and(|t| t.category().ends_operand())
                {
                    sign_start = Some(span.start);
                    continue;
                }
                let symbol = slice.chars().next().unwrap_or_default();
                Token::symbol(symbol, position).ok_or(LexError::UnrecognizedCharacter { character: symbol,
                                                                                        position })?
            },
        };

        trace!(category = %token.category(), lexeme = token.lexeme(), position, "token");
        tokens.push(token);
    }

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn starts_number(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Removes whitespace, remembering for every byte of the result the character
/// offset it came from in `input`.
fn strip_whitespace(input: &str) -> (String, Vec<usize>) {
    let mut source = String::with_capacity(input.len());
    let mut origins = Vec::with_capacity(input.len());

    for (position, character) in input.chars().enumerate().filter(|(_, c)| !c.is_whitespace()) {
        source.push(character);
        origins.extend(std::iter::repeat_n(position, character.len_utf8()));
    }

    (source, origins)
}
