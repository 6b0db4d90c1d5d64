use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The lexeme is the exact run of
    /// digits as written in the source; it is parsed into a value by the
    /// parser, not here.
    #[regex(r"[0-9]+", lexeme)]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any single character that no other rule recognizes, carried through
    /// as a token for the parser to reject.
    #[regex(r".", lexeme, priority = 0)]
    Invalid(String),
    /// Whitespace between tokens, including any Unicode space.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(lexeme) | Self::Invalid(lexeme) => write!(f, "{lexeme}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Captures the exact source text of the current token as its lexeme.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The matched source slice as an owned `String`.
fn lexeme(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

/// A pull-based tokenizer over one source string.
///
/// Wraps the Logos-generated scanner and yields exactly one [`Token`] per
/// call, on demand. Tokenization itself never fails: any character outside
/// the grammar comes out as [`Token::Invalid`] carrying that character as
/// its lexeme, and end of input maps to iterator exhaustion. Once the input
/// is exhausted, every further call returns `None`.
///
/// The cursor only ever moves forward, and no token is buffered beyond the
/// one being returned.
///
/// # Example
/// ```
/// use evalo::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<Token> = Lexer::new("1 + 2").collect();
/// assert_eq!(tokens,
///            vec![Token::Number("1".to_string()),
///                 Token::Plus,
///                 Token::Number("2".to_string())]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.inner.next()? {
            Ok(token) => Some(token),
            Err(()) => Some(Token::Invalid(self.inner.slice().to_string())),
        }
    }
}
