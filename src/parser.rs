//! Recursive-descent parser with precedence climbing.
//!
//! Grammar (binary operators left-associative, listed loosest first):
//!
//! ```text
//! expr    := iff
//! iff     := implies ('<->' implies)*
//! implies := xor ('->' xor)*
//! xor     := or ('^' or)*
//! or      := and ('||' and)*
//! and     := unary ('&&' unary)*
//! unary   := '!' unary | primary
//! primary := VARIABLE | '(' expr ')'
//! ```

use std::fmt;

use log::debug;

use crate::expr::{Expr, VarSet};
use crate::lexer::Lexer;
use crate::token::{OpKind, Span, Token};
use crate::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken,
    UnmatchedParen,
    EmptyExpression,
    MissingOperand,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnmatchedParen => "unmatched parenthesis",
            ParseErrorKind::EmptyExpression => "empty expression",
            ParseErrorKind::MissingOperand => "missing operand",
        };
        write!(f, "{}", s)
    }
}

/// A syntax error, reported at the character position of the offending token.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at position {position}: found {found}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    /// The token at the error site; [`Token::Eof`] when the input ended early.
    pub found: Token,
}

/// Parses `text` into an expression tree and its ordered variable set.
pub fn parse(text: &str) -> Result<(Expr, VarSet), Error> {
    let mut parser = Parser::new(Lexer::new(text))?;
    let result = parser.parse()?;
    debug!("parsed {:?} into {} ({} variables)", text, result.0, result.1.len());
    Ok(result)
}

/// Consumes a token stream and builds an [`Expr`], collecting every distinct
/// variable name in first-occurrence order.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: (Token, Span),
    vars: VarSet,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            vars: VarSet::new(),
        })
    }

    pub fn parse(&mut self) -> Result<(Expr, VarSet), Error> {
        if self.current.0 == Token::Eof {
            return Err(self.error(ParseErrorKind::EmptyExpression));
        }
        let expr = self.parse_binary(0)?;
        match self.current.0 {
            Token::Eof => Ok((expr, std::mem::take(&mut self.vars))),
            // A trailing ')' can only be a close with no matching open.
            Token::RParen => Err(self.error(ParseErrorKind::UnmatchedParen)),
            _ => Err(self.error(ParseErrorKind::UnexpectedToken)),
        }
    }

    /// Precedence climbing: consumes binary operators binding at least as
    /// tightly as `min_prec`, folding them left-associatively.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, Error> {
        let mut lhs = self.parse_unary()?;
        while let Token::Op(op) = self.current.0 {
            if !op.is_binary() || op.precedence() < min_prec {
                break;
            }
            self.advance()?;
            let rhs = self.parse_binary(op.precedence() + 1)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, Error> {
        if self.current.0 == Token::Op(OpKind::Not) {
            self.advance()?;
            Ok(Expr::not(self.parse_unary()?))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, Error> {
        match &self.current.0 {
            Token::Var(name) => {
                let name = name.clone();
                self.vars.insert(&name);
                self.advance()?;
                Ok(Expr::var(name))
            }
            Token::LParen => {
                let open = self.current.1.clone();
                self.advance()?;
                match self.current.0 {
                    // '()' holds no operators and no variables.
                    Token::RParen => return Err(self.error(ParseErrorKind::EmptyExpression)),
                    Token::Eof => {
                        return Err(Error::Parse(ParseError {
                            kind: ParseErrorKind::UnmatchedParen,
                            position: open.start,
                            found: Token::Eof,
                        }))
                    }
                    _ => {}
                }
                let expr = self.parse_binary(0)?;
                if self.current.0 == Token::RParen {
                    self.advance()?;
                    Ok(expr)
                } else {
                    // Report the opening paren that never got closed.
                    Err(Error::Parse(ParseError {
                        kind: ParseErrorKind::UnmatchedParen,
                        position: open.start,
                        found: self.current.0.clone(),
                    }))
                }
            }
            Token::Op(_) | Token::Eof => Err(self.error(ParseErrorKind::MissingOperand)),
            Token::RParen => Err(self.error(ParseErrorKind::UnexpectedToken)),
        }
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, kind: ParseErrorKind) -> Error {
        Error::Parse(ParseError {
            kind,
            position: self.current.1.start,
            found: self.current.0.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn parse_kind(text: &str) -> (ParseErrorKind, usize) {
        match parse(text) {
            Err(Error::Parse(err)) => (err.kind, err.position),
            other => panic!("expected a parse error for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn test_single_variable() {
        let (expr, vars) = parse("A").unwrap();
        assert_eq!(expr, Expr::var("A"));
        assert_eq!(vars.names(), ["A"]);
    }

    #[test]
    fn test_and_node() {
        let (expr, vars) = parse("A && B").unwrap();
        assert_eq!(expr, Expr::and(Expr::var("A"), Expr::var("B")));
        assert_eq!(vars.names(), ["A", "B"]);
    }

    #[test]
    fn test_not_binds_tighter_than_or() {
        let (expr, _) = parse("!A || B").unwrap();
        assert_eq!(expr, Expr::or(Expr::not(Expr::var("A")), Expr::var("B")));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let (expr, _) = parse("A || B && C").unwrap();
        assert_eq!(
            expr,
            Expr::or(Expr::var("A"), Expr::and(Expr::var("B"), Expr::var("C")))
        );
    }

    #[test]
    fn test_left_associativity() {
        let (expr, _) = parse("A && B && C").unwrap();
        assert_eq!(
            expr,
            Expr::and(Expr::and(Expr::var("A"), Expr::var("B")), Expr::var("C"))
        );
    }

    #[test]
    fn test_double_negation() {
        let (expr, _) = parse("!!A").unwrap();
        assert_eq!(expr, Expr::not(Expr::not(Expr::var("A"))));
    }

    #[test]
    fn test_parens_override_precedence() {
        let (expr, _) = parse("(A || B) && C").unwrap();
        assert_eq!(
            expr,
            Expr::and(Expr::or(Expr::var("A"), Expr::var("B")), Expr::var("C"))
        );
    }

    #[test]
    fn test_xor_implies_iff_precedence() {
        // Loosest binds last: ((A ^ B) -> C) <-> D
        let (expr, _) = parse("A ^ B -> C <-> D").unwrap();
        assert_eq!(
            expr,
            Expr::iff(
                Expr::implies(Expr::xor(Expr::var("A"), Expr::var("B")), Expr::var("C")),
                Expr::var("D")
            )
        );
    }

    #[test]
    fn test_variables_deduplicated_in_order() {
        let (_, vars) = parse("(B && A) || (B && C)").unwrap();
        assert_eq!(vars.names(), ["B", "A", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_kind(""), (ParseErrorKind::EmptyExpression, 0));
        assert_eq!(parse_kind("   "), (ParseErrorKind::EmptyExpression, 3));
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(parse_kind("()"), (ParseErrorKind::EmptyExpression, 1));
    }

    #[test]
    fn test_missing_right_operand() {
        assert_eq!(parse_kind("A &&"), (ParseErrorKind::MissingOperand, 4));
    }

    #[test]
    fn test_missing_left_operand() {
        assert_eq!(parse_kind("&& A"), (ParseErrorKind::MissingOperand, 0));
    }

    #[test]
    fn test_unmatched_open_paren() {
        assert_eq!(parse_kind("((A)"), (ParseErrorKind::UnmatchedParen, 0));
    }

    #[test]
    fn test_stray_close_paren() {
        assert_eq!(parse_kind("A)"), (ParseErrorKind::UnmatchedParen, 1));
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(parse_kind("A B"), (ParseErrorKind::UnexpectedToken, 2));
    }

    #[test]
    fn test_lex_error_surfaces() {
        assert!(matches!(parse("A @ B"), Err(Error::Lex(err)) if err.position == 2));
    }
}
