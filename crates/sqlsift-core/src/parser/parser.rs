//! SQL Parser implementation.

use tracing::debug;

use super::error::{Expected, ParseError};
use crate::ast::{
    Comparator, Comparison, Condition, Connective, Literal, OrderBy, OrderDirection, Query,
    SelectList,
};
use crate::lexer::{Keyword, Token, TokenKind};
use crate::profile::GrammarProfile;

/// Recursive descent parser over a token sequence, one token of lookahead.
pub struct Parser<'a> {
    tokens: &'a [Token],
    profile: &'a GrammarProfile,
    /// Index of the current token.
    pos: usize,
    /// Stands in for a missing EOF at the end of `tokens`.
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`, normally the output of the lexer.
    ///
    /// A slice that lacks the EOF sentinel is treated as if one followed its
    /// last token.
    #[must_use]
    pub fn new(tokens: &'a [Token], profile: &'a GrammarProfile) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Self {
            tokens,
            profile,
            pos: 0,
            eof: Token::eof(end),
        }
    }

    /// Index of the current token.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns true once every token before EOF has been consumed.
    #[must_use]
    pub fn is_at_eof(&self) -> bool {
        self.current().is_eof()
    }

    /// Parses a complete SELECT statement.
    ///
    /// On success the cursor rests on EOF.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first token that does not fit the
    /// grammar, or at the first token left over after the statement.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let columns = self.parse_select_list()?;

        self.expect_keyword(Keyword::From)?;
        let tables = self.parse_identifier_list()?;

        // WHERE clause
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_condition()?)
        } else {
            None
        };

        // GROUP BY, with HAVING only reachable from here
        let (group_by, having) = if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            let group_by = self.parse_identifier_list()?;
            let having = if self.eat_keyword(Keyword::Having) {
                Some(self.parse_condition()?)
            } else {
                None
            };
            (group_by, having)
        } else {
            (vec![], None)
        };

        // ORDER BY clause
        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        let terminated = if self.profile.semicolon_required {
            self.expect(TokenKind::Semicolon)?;
            true
        } else {
            self.eat(TokenKind::Semicolon)
        };

        if !self.is_at_eof() {
            return Err(ParseError::trailing(self.current()));
        }

        debug!(
            tables = tables.len(),
            has_where = where_clause.is_some(),
            grouped = !group_by.is_empty(),
            "parsed query"
        );

        Ok(Query {
            columns,
            tables,
            where_clause,
            group_by,
            having,
            order_by,
            terminated,
        })
    }

    /// Parses `*` or a list of column names.
    fn parse_select_list(&mut self) -> Result<SelectList, ParseError> {
        if self.eat(TokenKind::Star) {
            Ok(SelectList::Wildcard)
        } else {
            Ok(SelectList::Columns(self.parse_identifier_list()?))
        }
    }

    /// Parses OR-separated conjunctions, folding to the left.
    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let mut lhs = self.parse_conjunction()?;
        while self.eat_keyword(Keyword::Or) {
            let rhs = self.parse_conjunction()?;
            lhs = Condition::binary(lhs, Connective::Or, rhs);
        }
        Ok(lhs)
    }

    /// Parses AND-separated comparisons, folding to the left.
    fn parse_conjunction(&mut self) -> Result<Condition, ParseError> {
        let mut lhs = Condition::Comparison(self.parse_comparison()?);
        while self.eat_keyword(Keyword::And) {
            let rhs = Condition::Comparison(self.parse_comparison()?);
            lhs = Condition::binary(lhs, Connective::And, rhs);
        }
        Ok(lhs)
    }

    /// Parses `column comparator literal`.
    fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let column = self.expect_identifier()?;
        let op = self.parse_comparator()?;
        let value = self.parse_literal()?;
        Ok(Comparison { column, op, value })
    }

    fn parse_comparator(&mut self) -> Result<Comparator, ParseError> {
        let op = match self.current().kind {
            TokenKind::Eq => Comparator::Eq,
            TokenKind::NotEq => Comparator::NotEq,
            TokenKind::Lt => Comparator::Lt,
            TokenKind::LtEq => Comparator::LtEq,
            TokenKind::Gt => Comparator::Gt,
            TokenKind::GtEq => Comparator::GtEq,
            _ => {
                return Err(ParseError::unexpected(
                    Expected::Comparator,
                    self.current(),
                ));
            }
        };
        self.advance();
        Ok(op)
    }

    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let token = self.current();
        let literal = match token.kind {
            TokenKind::Identifier => Literal::Identifier(token.text.clone()),
            TokenKind::Number => Literal::Number(token.text.clone()),
            TokenKind::String => Literal::String(token.text.clone()),
            _ => return Err(ParseError::unexpected(Expected::Literal, token)),
        };
        self.advance();
        Ok(literal)
    }

    /// Parses an ORDER BY list.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let column = self.expect_identifier()?;
            let direction = if self.eat_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.eat_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            items.push(OrderBy { column, direction });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = vec![self.expect_identifier()?];
        while self.eat(TokenKind::Comma) {
            idents.push(self.expect_identifier()?);
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// The lookahead token.
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Advances to the next token. The cursor never moves past EOF.
    fn advance(&mut self) {
        if !self.is_at_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token is of the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes the current token if it is of the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(TokenKind::Keyword(keyword))
    }

    /// Expects the current token to be of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(ParseError::unexpected(kind, self.current()))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        self.expect(TokenKind::Keyword(keyword))
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            let name = self.current().text.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected(
                TokenKind::Identifier,
                self.current(),
            ))
        }
    }
}
