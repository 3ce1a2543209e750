//! Lexemes of the expression language.

use std::fmt;

/// Byte range of a token in the source text.
pub type Span = std::ops::Range<usize>;

/// A boolean connective.
///
/// Each kind has a fixed arity and a fixed binding strength. `Not` is the
/// only unary operator and outranks every binary one; the binary operators
/// are all left-associative.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKind {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl OpKind {
    /// Binding strength; a higher value binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::Not => 6,
            OpKind::And => 5,
            OpKind::Or => 4,
            OpKind::Xor => 3,
            OpKind::Implies => 2,
            OpKind::Iff => 1,
        }
    }

    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            OpKind::Not => 1,
            _ => 2,
        }
    }

    pub fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Canonical spelling, exactly as the lexer accepts it.
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Not => "!",
            OpKind::And => "&&",
            OpKind::Or => "||",
            OpKind::Xor => "^",
            OpKind::Implies => "->",
            OpKind::Iff => "<->",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One lexeme of a boolean expression.
///
/// Produced by the [`Lexer`][crate::lexer::Lexer] and consumed by the
/// [`Parser`][crate::parser::Parser]. The lexer always ends the stream with
/// a single `Eof` sentinel, so the parser never has to look past the end.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A variable name: a letter followed by letters or digits.
    Var(String),
    Op(OpKind),
    LParen,
    RParen,
    /// Sentinel produced once the source is exhausted.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(name) => write!(f, "variable '{}'", name),
            Token::Op(op) => write!(f, "operator '{}'", op),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
