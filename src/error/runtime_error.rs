#[derive(Debug)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
