//! S-expression parsing for minischeme
//!
//! Turns the scanned token stream into the `Value` trees the evaluator
//! consumes.

mod sexpr_parser;

pub use sexpr_parser::SExprParser;
