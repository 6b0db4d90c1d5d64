//! # evalo
//!
//! evalo is an integer arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates expressions built from integer
//! literals, the binary operators `+`, `-`, `*` and `/`, and parentheses,
//! with conventional operator precedence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{lexer::Lexer, parser::parse_expression},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing an expression. It standardizes error reporting and carries
/// the offending source text where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, arithmetic).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of one expression.
///
/// This module ties together the lexer and the parser to provide a complete
/// pipeline from raw expression text to an integer value.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and parser.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;

/// Evaluates one arithmetic expression and returns its value.
///
/// A fresh lexer and parser are constructed for every call and discarded
/// when it returns, so repeated calls on the same string yield identical
/// results and concurrent callers may evaluate different strings in
/// parallel. Tokens are pulled from the lexer one at a time; the whole
/// token stream is never buffered.
///
/// Trailing tokens after a syntactically complete expression are ignored:
/// `"1 + 2 3"` evaluates to `3`. Recursion depth equals the parenthesis
/// nesting depth of the input, so pathologically deep nesting can exhaust
/// the call stack.
///
/// # Errors
/// Returns an [`EvalError`] if the expression violates the grammar, divides
/// by zero, or produces a value outside the `i64` range.
///
/// # Examples
/// ```
/// use evalo::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvalError> {
    let mut tokens = Lexer::new(source).peekable();

    parse_expression(&mut tokens)
}
