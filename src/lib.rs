//! # minischeme - a small Scheme dialect interpreter
//!
//! A tree-walking interpreter: source text is tokenized, parsed into a
//! `Value` tree (S-expressions), and evaluated against a lexically
//! scoped environment with first-class procedures, closures, a fixed
//! table of special forms, and a builtin procedure library.
//!
//! ## Quick Start
//!
//! ```rust
//! use minischeme::{Evaluator, Value};
//!
//! let interp = Evaluator::new();
//! let result = interp.eval_source("(+ 1 2 3)").unwrap();
//! assert_eq!(result, Value::Number(6.0));
//! ```
//!
//! Definitions persist for the life of the session:
//!
//! ```rust
//! use minischeme::{Evaluator, Value};
//!
//! let interp = Evaluator::new();
//! interp
//!     .eval_source("(define (square x) (* x x))")
//!     .unwrap();
//! assert_eq!(
//!     interp.eval_source("(square 7)").unwrap(),
//!     Value::Number(49.0)
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Value tree → Evaluator → Value
//! ```
//!
//! - [`Scanner`] tokenizes source text
//! - [`Parser`] builds `Value` trees; quoted data and code share one shape
//! - [`Evaluator`] owns the global frame and runs the recursive interpreter
//! - [`Value`] is the uniform runtime representation
//! - [`Environment`] holds the chained lexical frames
//!
//! The individual stages are also available for embedding:
//!
//! ```rust
//! use minischeme::{Evaluator, Parser, Scanner, Value};
//!
//! let tokens = Scanner::new("(list 1 2)").scan_tokens().unwrap();
//! let exprs = Parser::new(tokens).parse_all().unwrap();
//! let result = Evaluator::new().execute(&exprs).unwrap();
//! assert_eq!(result.to_string(), "(1 2)");
//! ```

/// Version of the minischeme interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builtins;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::SExprParser;
pub use runtime::{EnvRef, Environment, Evaluator, Value};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
pub type Parser = SExprParser;
