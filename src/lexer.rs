//! Converts expression text into a lazy stream of tokens.

use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;
use thiserror::Error;

use crate::token::{OpKind, Span, Token};

/// An unrecognized character in the source text.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unrecognized character {character:?} at position {position}")]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

/// Tokenizer for the boolean expression grammar.
///
/// Recognized spellings are symbolic only: `!`, `&&`, `||`, `^`, `->`, `<->`,
/// parentheses, and variable names matching `[A-Za-z][A-Za-z0-9]*`
/// (case-sensitive). Whitespace is insignificant and skipped. After the
/// source is exhausted the lexer yields a single [`Token::Eof`].
pub struct Lexer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            done: false,
        }
    }

    /// The full source text being tokenized.
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Produces the next token and its byte span.
    pub fn next_token(&mut self) -> Result<(Token, Span), LexError> {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }

        let (start, c) = match self.chars.peek() {
            Some(&(pos, c)) => (pos, c),
            None => {
                let end = self.text.len();
                return Ok((Token::Eof, end..end));
            }
        };

        let token = match c {
            '(' => {
                self.chars.next();
                (Token::LParen, start..start + 1)
            }
            ')' => {
                self.chars.next();
                (Token::RParen, start..start + 1)
            }
            '!' => {
                self.chars.next();
                (Token::Op(OpKind::Not), start..start + 1)
            }
            '^' => {
                self.chars.next();
                (Token::Op(OpKind::Xor), start..start + 1)
            }
            '&' => {
                self.chars.next();
                self.expect_char('&', start, c)?;
                (Token::Op(OpKind::And), start..start + 2)
            }
            '|' => {
                self.chars.next();
                self.expect_char('|', start, c)?;
                (Token::Op(OpKind::Or), start..start + 2)
            }
            '-' => {
                self.chars.next();
                self.expect_char('>', start, c)?;
                (Token::Op(OpKind::Implies), start..start + 2)
            }
            '<' => {
                self.chars.next();
                self.expect_char('-', start, c)?;
                self.expect_char('>', start, c)?;
                (Token::Op(OpKind::Iff), start..start + 3)
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(pos, c)) = self.chars.peek() {
                    if c.is_ascii_alphanumeric() {
                        end = pos + c.len_utf8();
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                let name = &self.text[start..end];
                (Token::Var(name.to_string()), start..end)
            }
            c => {
                return Err(LexError {
                    position: start,
                    character: c,
                })
            }
        };

        trace!("token {:?} at {:?}", token.0, token.1);
        Ok(token)
    }

    /// Consumes `expected` as the continuation of a multi-character operator
    /// starting with `first` at `start`; anything else is a lex error at the
    /// operator's start.
    fn expect_char(&mut self, expected: char, start: usize, first: char) -> Result<(), LexError> {
        match self.chars.peek() {
            Some(&(_, c)) if c == expected => {
                self.chars.next();
                Ok(())
            }
            _ => Err(LexError {
                position: start,
                character: first,
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, Span), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Ok((Token::Eof, _)) | Err(_)) {
            self.done = true;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        Lexer::new(text)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_simple_and() {
        assert_eq!(
            tokens("A && B"),
            vec![
                Token::Var("A".to_string()),
                Token::Op(OpKind::And),
                Token::Var("B".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_all_operators() {
        assert_eq!(
            tokens("! && || ^ -> <->"),
            vec![
                Token::Op(OpKind::Not),
                Token::Op(OpKind::And),
                Token::Op(OpKind::Or),
                Token::Op(OpKind::Xor),
                Token::Op(OpKind::Implies),
                Token::Op(OpKind::Iff),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_parens_without_spaces() {
        assert_eq!(
            tokens("(ab||c1)"),
            vec![
                Token::LParen,
                Token::Var("ab".to_string()),
                Token::Op(OpKind::Or),
                Token::Var("c1".to_string()),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let spans: Vec<Span> = Lexer::new("ab && c")
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
            .into_iter()
            .map(|(_, span)| span)
            .collect();
        assert_eq!(spans, vec![0..2, 3..5, 6..7, 7..7]);
    }

    #[test]
    fn test_case_sensitive_names() {
        assert_eq!(
            tokens("a A"),
            vec![
                Token::Var("a".to_string()),
                Token::Var("A".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_eof_sentinel_once() {
        let items: Vec<_> = Lexer::new("  ").collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], Ok((Token::Eof, 2..2)));
    }

    #[test]
    fn test_unrecognized_character() {
        let mut lexer = Lexer::new("A $ B");
        assert_eq!(lexer.next_token().unwrap().0, Token::Var("A".to_string()));
        assert_eq!(
            lexer.next_token(),
            Err(LexError {
                position: 2,
                character: '$',
            })
        );
    }

    #[test]
    fn test_lone_ampersand() {
        let mut lexer = Lexer::new("A & B");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token(),
            Err(LexError {
                position: 2,
                character: '&',
            })
        );
    }

    #[test]
    fn test_incomplete_iff() {
        let mut lexer = Lexer::new("a <- b");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token(),
            Err(LexError {
                position: 2,
                character: '<',
            })
        );
    }

    #[test]
    fn test_digit_cannot_start_name() {
        let mut lexer = Lexer::new("1a");
        assert_eq!(
            lexer.next_token(),
            Err(LexError {
                position: 0,
                character: '1',
            })
        );
    }
}
