//! SQL tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};
use crate::profile::GrammarProfile;

/// A lexer that tokenizes a single query.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Grammar switches (accepted quote characters).
    profile: &'a GrammarProfile,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Set once the EOF sentinel has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str, profile: &'a GrammarProfile) -> Self {
        Self {
            input,
            profile,
            pos: 0,
            start: 0,
            finished: false,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Creates a token spanning from `start` to the current position.
    fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, Span::new(self.start, self.pos))
    }

    /// Creates a token whose text is the source slice it spans.
    fn make_symbol(&self, kind: TokenKind) -> Token {
        self.make_token(kind, &self.input[self.start..self.pos])
    }

    /// Scans an identifier or keyword. The first character is consumed.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword), keyword.as_str()),
            None => self.make_token(TokenKind::Identifier, text),
        }
    }

    /// Scans a number with at most one fractional part. The first digit is
    /// consumed.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_symbol(TokenKind::Number)
    }

    /// Scans a string literal. The opening quote is consumed.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some(c) if c == quote => break,
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedString {
                        quote,
                        position: self.start,
                    });
                }
            }
        }

        let content = &self.input[content_start..self.pos - quote.len_utf8()];
        Ok(self.make_token(TokenKind::String, content))
    }

    /// Consumes `second` if it is the current character and returns `long`,
    /// otherwise returns `short`.
    fn one_or_two(&mut self, second: char, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            long
        } else {
            short
        }
    }

    /// Scans the next token.
    ///
    /// After the EOF sentinel has been returned, every further call returns
    /// EOF again.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for an unrecognized character or an
    /// unterminated string literal.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            self.finished = true;
            return Ok(Token::eof(self.pos));
        };

        let token = match c {
            ',' => self.make_symbol(TokenKind::Comma),
            ';' => self.make_symbol(TokenKind::Semicolon),
            '*' => self.make_symbol(TokenKind::Star),
            '=' => self.make_symbol(TokenKind::Eq),

            // Two-character comparators win over their one-character prefix.
            '<' => {
                let kind = if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    self.one_or_two('=', TokenKind::LtEq, TokenKind::Lt)
                };
                self.make_symbol(kind)
            }
            '>' => {
                let kind = self.one_or_two('=', TokenKind::GtEq, TokenKind::Gt);
                self.make_symbol(kind)
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                self.make_symbol(TokenKind::NotEq)
            }

            q if self.profile.quotes.accepts(q) => self.scan_string(q)?,

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_alphabetic() || c == '_' => self.scan_word(),

            character => {
                return Err(LexError::UnexpectedCharacter {
                    character,
                    position: self.start,
                });
            }
        };

        Ok(token)
    }

    /// Tokenizes the remaining input. On success the last token is EOF.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`]; no partial token list is produced.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including EOF, then stops. An error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if item.is_err() {
            self.finished = true;
        }
        Some(item)
    }
}
