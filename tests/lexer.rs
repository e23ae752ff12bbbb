use pretty_assertions::assert_eq;
use trigcalc::{
    error::LexError,
    interpreter::lexer::{
        Token, TokenCategory, keyword,
        number::{CharClass, State, is_valid_number, parse_number, run},
        tokenize,
    },
};

fn categories(src: &str) -> Vec<TokenCategory> {
    tokenize(src).unwrap().iter().map(Token::category).collect()
}

fn lexemes(src: &str) -> Vec<String> {
    tokenize(src).unwrap().iter().map(|t| t.lexeme().to_string()).collect()
}

#[test]
fn automaton_transitions() {
    use CharClass as C;
    use State::*;

    let table = [(Initial, [Digit, Point, Sign, Error]),
                 (Digit, [Digit, DigitPoint, Error, Exponent]),
                 (Point, [PointDigit, Error, Error, Error]),
                 (Sign, [Digit, Point, Error, Error]),
                 (Exponent, [ExponentDigit, Error, ExponentSign, Error]),
                 (PointDigit, [PointDigit, Error, Error, Exponent]),
                 (ExponentDigit, [ExponentDigit, Error, Error, Error]),
                 (DigitPoint, [PointDigit, Error, Error, Exponent]),
                 (ExponentSign, [ExponentDigit, Error, Error, Error]),
                 (Error, [Error, Error, Error, Error])];

    for (state, expected) in table {
        let actual = [C::Digit, C::Point, C::Sign, C::Exponent].map(|class| state.next(class));
        assert_eq!(actual, expected, "transitions from {state:?}");
        assert_eq!(state.next(C::Other), Error, "other character from {state:?}");
    }
}

#[test]
fn accepting_states() {
    assert_eq!(run("12"), State::Digit);
    assert_eq!(run("12."), State::DigitPoint);
    assert_eq!(run(".5"), State::PointDigit);
    assert_eq!(run("1e-5"), State::ExponentDigit);
    assert_eq!(run("1e"), State::Exponent);
    assert_eq!(run("1e+"), State::ExponentSign);
    assert_eq!(run("-"), State::Sign);
    assert_eq!(run(""), State::Initial);
    assert_eq!(run("1x"), State::Error);

    assert!(State::Digit.is_accepting());
    assert!(State::DigitPoint.is_accepting());
    assert!(State::PointDigit.is_accepting());
    assert!(State::ExponentDigit.is_accepting());
    assert!(!State::Exponent.is_accepting());
    assert!(!State::Sign.is_accepting());
}

#[test]
fn valid_numbers() {
    for text in ["0", "42", "3.14", "3.", ".5", "-2", "+2", "-.5", "1e5", "1E5", "2.5e-3", "6.e+2",
                 ".5e1"]
    {
        assert!(is_valid_number(text), "{text} should be valid");
    }
}

#[test]
fn invalid_numbers() {
    for text in ["", ".", "-", "5..3", "1.2.3", "e5", "1e", "1e+", "1e5.0", "1-2", "--1", "1ee2",
                 "1e400", "1,5"]
    {
        assert!(!is_valid_number(text), "{text} should be invalid");
    }
}

#[test]
fn parse_number_matches_std() {
    assert_eq!(parse_number("6.e+2"), Some(600.0));
    assert_eq!(parse_number("-0"), Some(-0.0));
    assert_eq!(parse_number("0.1"), "0.1".parse().ok());
}

#[test]
fn operators_and_parentheses() {
    use TokenCategory::*;
    assert_eq!(categories("+-*/^()"),
               [Plus, Minus, Multiply, Divide, Power, LParen, RParen]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenCategory::*;
    for (word, expected) in [("sin", Sin),
                             ("sen", Sin),
                             ("SIN", Sin),
                             ("Sen", Sin),
                             ("cos", Cos),
                             ("COS", Cos),
                             ("tan", Tan),
                             ("Tan", Tan),
                             ("sIn", Identifier),
                             ("sine", Identifier),
                             ("theta", Identifier)]
    {
        assert_eq!(categories(word), [expected], "category of {word}");
        assert_eq!(keyword(word).unwrap_or(Identifier), expected);
    }
    assert_eq!(categories("sin(x)*ángulo"),
               [Sin, LParen, Identifier, RParen, Multiply, Identifier]);
}

#[test]
fn words_end_at_non_letters() {
    assert_eq!(lexemes("sinx"), ["sinx"]);
    assert_eq!(lexemes("x2y"), ["x", "2", "y"]);
}

#[test]
fn whitespace_is_removed_before_scanning() {
    assert_eq!(lexemes("1 2 . 5"), ["12.5"]);
    assert_eq!(lexemes("s i n(x)"), ["sin", "(", "x", ")"]);
}

#[test]
fn scientific_literals() {
    assert_eq!(lexemes("6.02e23*1E-9"), ["6.02e23", "*", "1E-9"]);
    let tokens = tokenize("2.5e-3").unwrap();
    assert_eq!(tokens[0].value(), Some(0.0025));
}

#[test]
fn sign_fusion_policy() {
    assert_eq!(lexemes("-3"), ["-3"]);
    assert_eq!(lexemes("4-2"), ["4", "-", "2"]);
    assert_eq!(lexemes("x-2"), ["x", "-", "2"]);
    assert_eq!(lexemes("(1)-2"), ["(", "1", ")", "-", "2"]);
    assert_eq!(lexemes("(-2)"), ["(", "-2", ")"]);
    assert_eq!(lexemes("2*-3"), ["2", "*", "-3"]);
    assert_eq!(lexemes("2^-.5"), ["2", "^", "-.5"]);
    assert_eq!(lexemes("1--2"), ["1", "-", "-2"]);
    assert_eq!(lexemes("-x"), ["-", "x"]);
}

#[test]
fn number_tokens_carry_values() {
    let tokens = tokenize("sin(-1.5)+x").unwrap();
    let values: Vec<_> = tokens.iter().map(Token::value).collect();
    assert_eq!(values, [None, None, Some(-1.5), None, None, None]);
}

#[test]
fn positions_refer_to_the_original_input() {
    let positions: Vec<_> = tokenize("  x *\t( -2 )").unwrap()
                                                    .iter()
                                                    .map(Token::position)
                                                    .collect();
    assert_eq!(positions, [2, 4, 6, 8, 11]);
}

#[test]
fn lexical_errors() {
    assert_eq!(tokenize("1 + 2 $"),
               Err(LexError::UnrecognizedCharacter { character: '$',
                                                     position:  6, }));
    assert_eq!(tokenize("x = 1"),
               Err(LexError::UnrecognizedCharacter { character: '=',
                                                     position:  2, }));
    assert_eq!(tokenize("3 * 5..3"),
               Err(LexError::MalformedNumber { text:     "5..3".to_string(),
                                               position: 4, }));
    assert_eq!(tokenize("2 * -.e"),
               Err(LexError::MalformedNumber { text:     "-.e".to_string(),
                                               position: 4, }));
}

#[test]
fn token_constructors() {
    let number = Token::number("2", 2.0, 0);
    assert_eq!(number.category(), TokenCategory::Number);
    assert_eq!(number.value(), Some(2.0));

    let word = Token::word("Cos", 3);
    assert_eq!(word.category(), TokenCategory::Cos);
    assert_eq!(word.value(), None);
    assert_eq!(word.position(), 3);

    assert_eq!(Token::symbol('^', 1).map(|t| t.category()), Some(TokenCategory::Power));
    assert_eq!(Token::symbol('%', 1), None);
}
