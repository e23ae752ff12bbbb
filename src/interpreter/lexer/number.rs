/// States of the numeric literal automaton.
///
/// The discriminants index the rows of the transition table, so the variant
/// order must match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing consumed yet.
    Initial,
    /// One or more integer digits.
    Digit,
    /// A leading point with no digits after it.
    Point,
    /// A leading sign.
    Sign,
    /// An exponent marker with no digits after it.
    Exponent,
    /// Fraction digits after a point.
    PointDigit,
    /// Exponent digits.
    ExponentDigit,
    /// Sink state; the literal can never become valid.
    Error,
    /// Integer digits followed by a point, e.g. `5.`.
    DigitPoint,
    /// An exponent marker followed by a sign.
    ExponentSign,
}

/// Classes of characters the automaton distinguishes.
///
/// The discriminants index the columns of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0`-`9`
    Digit,
    /// `.`
    Point,
    /// `+` or `-`
    Sign,
    /// `e` or `E`
    Exponent,
    /// Anything else.
    Other,
}

impl CharClass {
    /// Classifies a single character.
    ///
    /// ## Example
    /// ```
    /// use trigcalc::interpreter::lexer::number::CharClass;
    ///
    /// assert_eq!(CharClass::of('7'), CharClass::Digit);
    /// assert_eq!(CharClass::of('E'), CharClass::Exponent);
    /// assert_eq!(CharClass::of('x'), CharClass::Other);
    /// ```
    #[must_use]
    pub const fn of(character: char) -> Self {
        match character {
            '0'..='9' => Self::Digit,
            '.' => Self::Point,
            '+' | '-' => Self::Sign,
            'e' | 'E' => Self::Exponent,
            _ => Self::Other,
        }
    }
}

const TRANSITIONS: [[State; 5]; 10] = {
    use State::{
        Digit, DigitPoint, Error, Exponent, ExponentDigit, ExponentSign, Point, PointDigit, Sign,
    };
    [
        // Initial
        [Digit, Point, Sign, Error, Error],
        // Digit
        [Digit, DigitPoint, Error, Exponent, Error],
        // Point
        [PointDigit, Error, Error, Error, Error],
        // Sign
        [Digit, Point, Error, Error, Error],
        // Exponent
        [ExponentDigit, Error, ExponentSign, Error, Error],
        // PointDigit
        [PointDigit, Error, Error, Exponent, Error],
        // ExponentDigit
        [ExponentDigit, Error, Error, Error, Error],
        // Error
        [Error, Error, Error, Error, Error],
        // DigitPoint
        [PointDigit, Error, Error, Exponent, Error],
        // ExponentSign
        [ExponentDigit, Error, Error, Error, Error],
    ]
};

impl State {
    /// Returns the state reached by consuming a character of class `class`.
    #[must_use]
    pub const fn next(self, class: CharClass) -> Self {
        TRANSITIONS[self as usize][class as usize]
    }

    /// Whether a literal ending in this state is well formed.
    #[must_use]
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::Digit | Self::PointDigit | Self::ExponentDigit | Self::DigitPoint)
    }
}

/// Runs the automaton over `text` and returns the final state.
#[must_use]
pub fn run(text: &str) -> State {
    text.chars()
        .fold(State::Initial, |state, character| state.next(CharClass::of(character)))
}

/// Validates and converts a numeric literal.
///
/// The text must end in an accepting state and must also convert to a finite
/// `f64`, which rules out literals that overflow.
///
/// # Returns
/// - `Some(f64)`: The value of a well formed literal.
/// - `None`: If the literal is malformed or not finite.
///
/// ## Example
/// ```
/// use trigcalc::interpreter::lexer::number::parse_number;
///
/// assert_eq!(parse_number("-.5"), Some(-0.5));
/// assert_eq!(parse_number("2.5e-3"), Some(0.0025));
/// assert_eq!(parse_number("5..3"), None);
/// assert_eq!(parse_number("1e400"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    if !run(text).is_accepting() {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns whether `text` is a well formed numeric literal.
///
/// Accepted forms are plain integers (`42`), decimals with digits on either
/// side of the point (`3.`, `.5`, `3.14`), an optional leading sign and an
/// optional exponent with its own optional sign (`6.02e23`, `1E-9`).
///
/// ## Example
/// ```
/// use trigcalc::interpreter::lexer::number::is_valid_number;
///
/// assert!(is_valid_number("3."));
/// assert!(!is_valid_number("."));
/// assert!(!is_valid_number("e5"));
/// ```
#[must_use]
pub fn is_valid_number(text: &str) -> bool {
    parse_number(text).is_some()
}
