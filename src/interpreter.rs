/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a
/// stream of tokens, one at a time, each corresponding to a meaningful
/// element: an integer literal, an operator, or a parenthesis. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens on demand.
/// - Skips whitespace between tokens.
/// - Surfaces unrecognized characters as invalid tokens instead of failing.
pub mod lexer;
/// The parser module computes the value of the token stream.
///
/// The parser consumes tokens produced by the lexer through recursive
/// descent, building operator precedence out of grammar recursion. It folds
/// operand values together as it descends, so no syntax tree is ever
/// materialized.
///
/// # Responsibilities
/// - Validates the expression grammar, reporting syntax errors.
/// - Folds values left-to-right with checked integer arithmetic.
/// - Reports division by zero and overflow as it computes.
pub mod parser;
