//! Tokeniser for membership expressions.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use super::ExpressionError;

/// Characters that start an operator from a general-purpose expression
/// language. They are rejected as unsupported rather than unexpected.
const OPERATOR_CHARS: &[char] = &[
    '&', '|', '!', '=', '<', '>', '+', '-', '*', '/', '%', '^', '~', '?', ':',
];

const RECEIVER: &str = "user";
const METHOD: &str = "contains";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TokenKind {
    LParen,
    RParen,
    And,
    Or,
    Not,
    Contains(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::And => f.write_str("'and'"),
            Self::Or => f.write_str("'or'"),
            Self::Not => f.write_str("'not'"),
            Self::Contains(group) => write!(f, "membership test for '{group}'"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) position: usize,
}

impl Token {
    const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Split `input` into tokens.
pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ExpressionError> {
        let mut tokens = Vec::new();
        while let Some(&(position, ch)) = self.chars.peek() {
            match ch {
                '(' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::LParen, position));
                }
                ')' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::RParen, position));
                }
                '#' => tokens.push(self.membership(position)?),
                _ if ch.is_whitespace() => {
                    self.chars.next();
                }
                _ if is_identifier_start(ch) => tokens.push(self.keyword(position)?),
                _ if OPERATOR_CHARS.contains(&ch) => return Err(self.operator(position)),
                _ => {
                    return Err(ExpressionError::syntax(
                        position,
                        format!("unexpected character '{ch}'"),
                    ));
                }
            }
        }
        Ok(tokens)
    }

    /// Byte offset of the next unread character.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.input.len(), |&(position, _)| position)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.offset();
        while self
            .chars
            .next_if(|&(_, c)| is_identifier_continue(c))
            .is_some()
        {}
        let end = self.offset();
        self.input.get(start..end).unwrap_or_default()
    }

    fn keyword(&mut self, position: usize) -> Result<Token, ExpressionError> {
        let kind = match self.identifier() {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            other => {
                return Err(ExpressionError::semantic(
                    position,
                    format!("unknown identifier '{other}'"),
                ));
            }
        };
        Ok(Token::new(kind, position))
    }

    fn operator(&mut self, position: usize) -> ExpressionError {
        let mut operator = String::new();
        while let Some((_, c)) = self.chars.next_if(|&(_, c)| OPERATOR_CHARS.contains(&c)) {
            operator.push(c);
        }
        ExpressionError::semantic(position, format!("unsupported operator '{operator}'"))
    }

    fn expect(&mut self, expected: char, context: &str) -> Result<(), ExpressionError> {
        if self.chars.next_if(|&(_, c)| c == expected).is_some() {
            return Ok(());
        }
        Err(ExpressionError::syntax(
            self.offset(),
            format!("expected '{expected}' {context}"),
        ))
    }

    /// Lex `#user.contains('<group>')` starting at the `#`.
    fn membership(&mut self, position: usize) -> Result<Token, ExpressionError> {
        self.chars.next();
        let receiver = self.identifier();
        if receiver.is_empty() {
            return Err(ExpressionError::syntax(
                self.offset(),
                "expected an identifier after '#'",
            ));
        }
        if receiver != RECEIVER {
            return Err(ExpressionError::semantic(
                position,
                format!("unknown identifier '#{receiver}'"),
            ));
        }
        self.expect('.', "after '#user'")?;
        let method_at = self.offset();
        let method = self.identifier();
        if method.is_empty() {
            return Err(ExpressionError::syntax(
                method_at,
                "expected a method name after '#user.'",
            ));
        }
        if method != METHOD {
            return Err(ExpressionError::semantic(
                method_at,
                format!("unsupported method '#user.{method}'"),
            ));
        }
        self.skip_whitespace();
        self.expect('(', "after '#user.contains'")?;
        self.skip_whitespace();
        self.expect('\'', "to open the group name")?;
        let group = self.group_name()?;
        self.skip_whitespace();
        self.expect(')', "to close '#user.contains('")?;
        Ok(Token::new(TokenKind::Contains(group), position))
    }

    /// Read a group name up to and including its closing quote.
    fn group_name(&mut self) -> Result<String, ExpressionError> {
        let start = self.offset();
        let mut group = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\'')) => break,
                Some((_, c)) => group.push(c),
                None => {
                    return Err(ExpressionError::syntax(
                        self.input.len(),
                        format!("unterminated group name starting at offset {start}"),
                    ));
                }
            }
        }
        if group.is_empty() {
            return Err(ExpressionError::syntax(start, "group name must not be empty"));
        }
        Ok(group)
    }
}

const fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

const fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
