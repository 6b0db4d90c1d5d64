#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that no grammar rule accepts.
    UnexpectedToken {
        /// The token encountered, as written in the source.
        token: String,
    },
    /// Reached the end of input while a grammar rule still needed tokens.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// An integer literal is too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input.")
            },

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::LiteralTooLarge { literal } => {
                write!(f, "Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
