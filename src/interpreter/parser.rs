use std::iter::Peekable;

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Represents a binary operator.
///
/// These are the four arithmetic operators of the expression grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Parses a full expression and computes its value.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy. No syntax tree is built:
/// each rule folds its operands into an `i64` as it goes.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Propagates any error from the nested rules, and any overflow from the
/// folding itself.
///
/// # Example
/// ```
/// use evalo::interpreter::{lexer::Lexer, parser::parse_expression};
///
/// let mut tokens = Lexer::new("10 - 3 - 2").peekable();
/// assert_eq!(parse_expression(&mut tokens).unwrap(), 5);
/// ```
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<i64>
    where I: Iterator<Item = Token>
{
    let mut result = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_term(tokens)?;
            result = apply_binary(op, result, right)?;
            continue;
        }
        break;
    }
    Ok(result)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// The folded value of the factor chain.
pub(crate) fn parse_term<I>(tokens: &mut Peekable<I>) -> ParseResult<i64>
    where I: Iterator<Item = Token>
{
    let mut result = parse_factor(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            result = apply_binary(op, result, right)?;
            continue;
        }
        break;
    }
    Ok(result)
}

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is either an integer literal or a parenthesized expression.
/// Parentheses have the highest precedence: the enclosed expression is
/// evaluated in full before the surrounding rule continues.
///
/// The rule is: `factor := NUMBER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The value of the literal or of the enclosed expression.
///
/// # Errors
/// - `LiteralTooLarge` if a digit run does not fit into an `i64`.
/// - `ExpectedClosingParen` if `(` is not matched by `)`.
/// - `UnexpectedToken` for any other token, including invalid characters.
/// - `UnexpectedEndOfInput` if the input ends where a factor must start.
pub(crate) fn parse_factor<I>(tokens: &mut Peekable<I>) -> ParseResult<i64>
    where I: Iterator<Item = Token>
{
    match tokens.next() {
        Some(Token::Number(lexeme)) => {
            lexeme.parse::<i64>()
                  .map_err(|_| ParseError::LiteralTooLarge { literal: lexeme }.into())
        },
        Some(Token::LParen) => {
            let result = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(result),
                _ => Err(ParseError::ExpectedClosingParen.into()),
            }
        },
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: token.to_string() }.into())
        },
        None => Err(ParseError::UnexpectedEndOfInput.into()),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators. Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use evalo::interpreter::{
///     lexer::Token,
///     parser::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Applies a binary operator to two integer operands.
///
/// All arithmetic is checked. Division truncates toward zero; a divisor of
/// exactly 0 is rejected before the division is performed.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is 0.
/// - `Overflow` if the result does not fit into an `i64`.
///
/// # Example
/// ```
/// use evalo::interpreter::parser::{BinaryOperator, apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Mul, 6, 7).unwrap(), 42);
/// assert!(apply_binary(BinaryOperator::Div, 1, 0).is_err());
/// ```
pub const fn apply_binary(op: BinaryOperator,
                          left: i64,
                          right: i64)
                          -> Result<i64, RuntimeError> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };

    match result {
        Some(value) => Ok(value),
        None => Err(RuntimeError::Overflow),
    }
}
