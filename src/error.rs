/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected tokens, unbalanced
/// parentheses, oversized literals, and input that ends too early.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing the value of
/// a well-formed expression, such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error produced while evaluating one expression.
///
/// Evaluation is a single pass, so both error families can surface from the
/// same call: the grammar may be violated, or a syntactically valid
/// expression may have no representable value. The first error encountered
/// aborts the evaluation and propagates here unchanged.
pub enum EvalError {
    /// The expression is not well formed.
    Parse(ParseError),
    /// The expression is well formed, but its value cannot be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
