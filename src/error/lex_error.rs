use thiserror::Error;

/// Represents all errors that can occur while scanning an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Unrecognized character '{character}' at position {position}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the original input.
        position:  usize,
    },
    /// A numeric literal rejected by the number automaton.
    #[error("Malformed number '{text}' at position {position}.")]
    MalformedNumber {
        /// The literal text, including a fused sign.
        text:     String,
        /// Character offset in the original input.
        position: usize,
    },
}
