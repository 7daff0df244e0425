//! Recursive-descent parser over the token stream.

use std::iter::Peekable;
use std::vec::IntoIter;

use super::ExpressionError;
use super::ast::Expr;
use super::lexer::{Token, TokenKind, tokenize};

/// Maximum nesting of parentheses and `not` before the parser gives up.
const MAX_DEPTH: usize = 64;

/// Parse `input` into an expression tree.
pub(super) fn parse(input: &str) -> Result<Expr, ExpressionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::syntax(0, "expression is empty"));
    }
    let mut parser = Parser::new(tokens, input.len());
    let expr = parser.or_expr()?;
    if let Some(token) = parser.tokens.next() {
        return Err(ExpressionError::syntax(
            token.position,
            format!("unexpected {} after a complete expression", token.kind),
        ));
    }
    Ok(expr)
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    end: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            end,
            depth: 0,
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.tokens.next_if(|token| token.kind == *kind).is_some()
    }

    fn or_expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.and_expr()?;
        while self.eat(&TokenKind::Or) {
            let rhs = self.and_expr()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.unary()?;
        while self.eat(&TokenKind::And) {
            let rhs = self.unary()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        let Some(token) = self.tokens.next_if(|token| token.kind == TokenKind::Not) else {
            return self.primary();
        };
        self.descend(token.position)?;
        let inner = self.unary()?;
        self.depth -= 1;
        Ok(Expr::Not(Box::new(inner)))
    }

    fn primary(&mut self) -> Result<Expr, ExpressionError> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Contains(group),
                ..
            }) => Ok(Expr::Contains(group)),
            Some(Token {
                kind: TokenKind::LParen,
                position,
            }) => self.group(position),
            Some(token) => Err(ExpressionError::syntax(
                token.position,
                format!("expected a membership test or '(', found {}", token.kind),
            )),
            None => Err(ExpressionError::syntax(
                self.end,
                "expected a membership test or '(' but the expression ended",
            )),
        }
    }

    /// Parse the body of a parenthesised group opened at `open`.
    fn group(&mut self, open: usize) -> Result<Expr, ExpressionError> {
        self.descend(open)?;
        let inner = self.or_expr()?;
        self.depth -= 1;
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(inner),
            Some(token) => Err(ExpressionError::syntax(
                token.position,
                format!(
                    "expected ')' to close '(' at offset {open}, found {}",
                    token.kind
                ),
            )),
            None => Err(ExpressionError::syntax(
                self.end,
                format!("unclosed '(' opened at offset {open}"),
            )),
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::syntax(
                position,
                format!("expression nests deeper than {MAX_DEPTH} levels"),
            ));
        }
        self.depth += 1;
        Ok(())
    }
}
