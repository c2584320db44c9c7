use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for Scheme S-expression syntax
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of the current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl SExprScanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from the source and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            self.column,
        ));

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let line = self.line;
        let column = self.column;
        let c = self.advance();

        match c {
            // Whitespace
            ' ' | '\r' | '\t' | '\n' => {}

            // Line comments
            ';' => self.skip_line_comment(),

            '(' => self.add_token(TokenKind::LeftParen, line, column),
            ')' => self.add_token(TokenKind::RightParen, line, column),

            // Reader macro prefixes
            '\'' => self.add_token(TokenKind::Quote, line, column),
            '`' => self.add_token(TokenKind::Quasiquote, line, column),
            ',' => self.add_token(TokenKind::Unquote, line, column),

            '"' => self.scan_string(line, column)?,

            // Everything else is one atom: a boolean literal, the dot,
            // a number, or an identifier. Scheme identifiers include
            // characters like + - * / < > = ! ? so the split between
            // number and identifier happens after the atom is read.
            _ => self.scan_atom(line, column)?,
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self, line: usize, column: usize) -> Result<()> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\\' {
                self.advance();
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    other => {
                        return Err(self.syntax_error(
                            format!("Unknown escape sequence '\\{}'", other),
                            line,
                            column,
                        ))
                    }
                }
            } else {
                let c = self.advance();
                value.push(c);
            }
        }

        if self.is_at_end() {
            return Err(self.syntax_error("Unterminated string literal".to_string(), line, column));
        }

        self.advance(); // closing quote
        self.add_token(TokenKind::Str(value), line, column);
        Ok(())
    }

    fn scan_atom(&mut self, line: usize, column: usize) -> Result<()> {
        while !self.is_at_end() && !Self::is_delimiter(self.peek()) {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let kind = match lexeme.as_str() {
            "#t" => TokenKind::Boolean(true),
            "#f" => TokenKind::Boolean(false),
            "." => TokenKind::Dot,
            _ if lexeme.starts_with('#') => {
                return Err(self.syntax_error(format!("Unknown literal '{}'", lexeme), line, column))
            }
            _ if Self::looks_numeric(&lexeme) => match lexeme.parse::<f64>() {
                Ok(n) => TokenKind::Number(n),
                Err(_) => {
                    return Err(self.syntax_error(
                        format!("Malformed number '{}'", lexeme),
                        line,
                        column,
                    ))
                }
            },
            _ => TokenKind::Identifier(lexeme.clone()),
        };

        self.tokens.push(Token::new(kind, lexeme, line, column));
        Ok(())
    }

    /// True when the atom must be a numeric literal: it starts with a
    /// digit, or with a sign or dot immediately followed by a digit.
    /// This keeps identifiers like `+`, `-` and `->` out of the number
    /// path.
    fn looks_numeric(lexeme: &str) -> bool {
        let mut chars = lexeme.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('+') | Some('-') | Some('.') => {
                matches!(chars.next(), Some(c) if c.is_ascii_digit())
            }
            _ => false,
        }
    }

    fn is_delimiter(c: char) -> bool {
        c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '`' | ',' | '"' | ';')
    }

    fn add_token(&mut self, kind: TokenKind, line: usize, column: usize) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        self.source[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn syntax_error(&self, message: String, line: usize, col: usize) -> Error {
        Error::SyntaxError { line, col, message }
    }
}
