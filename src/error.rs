//! Error types for the minischeme interpreter

use thiserror::Error;

/// Interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Scanner/parser errors
    /// Malformed source text or token stream
    ///
    /// **Triggered by:** unbalanced parentheses, a misplaced dot, an
    /// unterminated string, an unknown literal
    #[error("{message} (line {line}, column {col})")]
    SyntaxError {
        /// Line number where the error occurred (1-indexed)
        line: usize,
        /// Column number where the error occurred (1-indexed)
        col: usize,
        /// Error description
        message: String,
    },

    /// Ran out of tokens where an expression was required
    #[error("Unexpected end of input")]
    UnexpectedEof,

    // Evaluation errors
    /// Reference to a name with no binding in the environment chain
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// A value failed a predicate required by a builtin or special form
    ///
    /// **Example:** `(car 1)`, `(+ "hello" 5)`, `(lambda 3 x)`
    #[error("Expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type
        got: String,
    },

    /// Wrong number of operands to a special form, builtin, or lambda
    #[error("{name} expected {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Name of the form or procedure
        name: String,
        /// Expected count, e.g. "exactly 1" or "at least 2"
        expected: String,
        /// Actual count
        got: usize,
    },

    /// Attempt to call a value that is not a procedure
    #[error("Value is not callable: {type_name}")]
    NotCallable {
        /// Type of the non-callable value
        type_name: String,
    },

    /// Division, quotient, modulo, or remainder with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Operation that requires elements applied to an empty list
    #[error("Empty list for operation: {operation}")]
    EmptyCollection {
        /// Operation name
        operation: String,
    },

    /// Raised by the `error` builtin with a user-supplied message
    #[error("{0}")]
    UserError(String),

    /// General evaluation error
    #[error("{0}")]
    RuntimeError(String),
}

/// Error category, used by the driver to pick a message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token stream
    Syntax,
    /// Undefined variable
    Name,
    /// Value of the wrong shape
    Type,
    /// Wrong operand count
    Arity,
    /// Arithmetic domain violation
    Domain,
    /// Raised by the `error` builtin
    User,
}

impl Error {
    /// Create a general evaluation error with a message
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::RuntimeError(msg.into())
    }

    /// Classify the error into one of the driver-visible categories
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SyntaxError { .. } | Error::UnexpectedEof => ErrorKind::Syntax,
            Error::UndefinedVariable { .. } => ErrorKind::Name,
            Error::TypeError { .. } | Error::NotCallable { .. } | Error::RuntimeError(_) => {
                ErrorKind::Type
            }
            Error::ArityMismatch { .. } => ErrorKind::Arity,
            Error::DivisionByZero | Error::EmptyCollection { .. } => ErrorKind::Domain,
            Error::UserError(_) => ErrorKind::User,
        }
    }
}

/// Result type for interpreter operations
pub type Result<T> = std::result::Result<T, Error>;
