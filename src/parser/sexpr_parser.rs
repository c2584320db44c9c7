use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

/// S-expression parser: token stream in, `Value` trees out
///
/// There is no separate AST; the parser builds the same `Value`
/// representation the evaluator consumes, so quoted data and code share
/// one shape.
pub struct SExprParser {
    tokens: Vec<Token>,
    current: usize,
}

impl SExprParser {
    /// Creates a new parser over a scanned token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens, current: 0 }
    }

    /// Parses and consumes one top-level expression
    pub fn parse(&mut self) -> Result<Value> {
        let token = self.advance().clone();
        match token.kind {
            TokenKind::Boolean(b) => Ok(Value::Bool(b)),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::Str(ref s) => Ok(Value::string(s)),
            TokenKind::Identifier(ref name) => Ok(Value::symbol(name)),

            // Reader macros: 'x, `x and ,x become two-element lists
            // headed by the matching symbol.
            TokenKind::Quote => self.parse_reader_macro("quote"),
            TokenKind::Quasiquote => self.parse_reader_macro("quasiquote"),
            TokenKind::Unquote => self.parse_reader_macro("unquote"),

            TokenKind::LeftParen => self.parse_tail(),

            TokenKind::RightParen => Err(self.syntax_error("Unexpected ')'", &token)),
            TokenKind::Dot => Err(self.syntax_error("Unexpected '.' outside a list", &token)),
            TokenKind::Eof => Err(Error::UnexpectedEof),
        }
    }

    /// Parses every remaining top-level expression
    pub fn parse_all(&mut self) -> Result<Vec<Value>> {
        let mut exprs = Vec::new();
        while !self.is_at_end() {
            exprs.push(self.parse()?);
        }
        Ok(exprs)
    }

    fn parse_reader_macro(&mut self, symbol: &str) -> Result<Value> {
        let quoted = self.parse()?;
        Ok(Value::list(vec![Value::symbol(symbol), quoted]))
    }

    /// Parses the remainder of a list after its opening paren: elements
    /// until `)` for a proper list, or `. expr )` for a dotted tail.
    fn parse_tail(&mut self) -> Result<Value> {
        if self.check(&TokenKind::RightParen) {
            self.advance();
            return Ok(Value::Nil);
        }
        if self.check(&TokenKind::Eof) {
            return Err(Error::UnexpectedEof);
        }

        let car = self.parse()?;

        if self.check(&TokenKind::Dot) {
            self.advance();
            let cdr = self.parse()?;
            if !self.check(&TokenKind::RightParen) {
                let token = self.peek().clone();
                return Err(self.syntax_error("Expected ')' after dotted tail", &token));
            }
            self.advance();
            return Ok(Value::cons(car, cdr));
        }

        let cdr = self.parse_tail()?;
        Ok(Value::cons(car, cdr))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> &Token {
        let index = self.current;
        if !matches!(self.tokens[index].kind, TokenKind::Eof) {
            self.current += 1;
        }
        &self.tokens[index]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn syntax_error(&self, message: &str, token: &Token) -> Error {
        Error::SyntaxError {
            line: token.line,
            col: token.column,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::SExprScanner;

    fn parse_one(source: &str) -> Value {
        let tokens = SExprScanner::new(source).scan_tokens().unwrap();
        SExprParser::new(tokens).parse().unwrap()
    }

    fn parse_err(source: &str) -> Error {
        let tokens = SExprScanner::new(source).scan_tokens().unwrap();
        SExprParser::new(tokens).parse_all().unwrap_err()
    }

    #[test]
    fn test_parse_atoms() {
        assert_eq!(parse_one("42"), Value::Number(42.0));
        assert_eq!(parse_one("#t"), Value::Bool(true));
        assert_eq!(parse_one("\"hi\""), Value::string("hi"));
        assert_eq!(parse_one("foo"), Value::symbol("foo"));
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(parse_one("()"), Value::Nil);
        assert_eq!(parse_one("(+ 1 2)").to_string(), "(+ 1 2)");
        assert_eq!(parse_one("(a (b c) d)").to_string(), "(a (b c) d)");
    }

    #[test]
    fn test_parse_dotted_pairs() {
        assert_eq!(parse_one("(1 . 2)").to_string(), "(1 . 2)");
        assert_eq!(parse_one("(1 2 . 3)").to_string(), "(1 2 . 3)");
        // A dotted Nil tail collapses into a proper list.
        assert_eq!(parse_one("(1 . ())").to_string(), "(1)");
    }

    #[test]
    fn test_parse_reader_macros() {
        assert_eq!(parse_one("'x").to_string(), "(quote x)");
        assert_eq!(parse_one("`(a ,b)").to_string(), "(quasiquote (a (unquote b)))");
        assert_eq!(parse_one("''x").to_string(), "(quote (quote x))");
        assert_eq!(parse_one("'(1 2)").to_string(), "(quote (1 2))");
    }

    #[test]
    fn test_parse_all_top_level() {
        let tokens = SExprScanner::new("1 (2 3) x").scan_tokens().unwrap();
        let exprs = SExprParser::new(tokens).parse_all().unwrap();
        assert_eq!(exprs.len(), 3);
        assert_eq!(exprs[0], Value::Number(1.0));
        assert_eq!(exprs[2], Value::symbol("x"));
    }

    #[test]
    fn test_unbalanced_parens() {
        assert_eq!(parse_err("(1 2"), Error::UnexpectedEof);
        assert!(matches!(parse_err(")"), Error::SyntaxError { .. }));
    }

    #[test]
    fn test_dot_misuse() {
        assert!(matches!(parse_err("(1 . 2 3)"), Error::SyntaxError { .. }));
        assert!(matches!(parse_err(". 5"), Error::SyntaxError { .. }));
        assert_eq!(parse_err("(1 ."), Error::UnexpectedEof);
    }

    #[test]
    fn test_quote_at_eof() {
        assert_eq!(parse_err("'"), Error::UnexpectedEof);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(
            SExprParser::new(SExprScanner::new("").scan_tokens().unwrap())
                .parse()
                .unwrap_err(),
            Error::UnexpectedEof
        );
    }

    #[test]
    fn test_syntax_error_carries_position() {
        match parse_err("(1 . 2 3)") {
            Error::SyntaxError { line, col, .. } => {
                assert_eq!(line, 1);
                assert_eq!(col, 8);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
