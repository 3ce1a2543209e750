//! # truthtable-rs: Truth tables for boolean expressions
//!
//! **`truthtable-rs`** parses a textual boolean-algebra expression over named
//! variables and produces its complete truth table: one row per assignment of
//! 0/1 to each variable, together with the expression's result.
//!
//! ## Grammar
//!
//! Operator spellings are symbolic only. From tightest to loosest binding:
//! `!` (not), `&&` (and), `||` (or), `^` (xor), `->` (implies), `<->` (iff).
//! Binary operators are left-associative; `!` is a right-associative prefix.
//! Variable names are a letter followed by letters or digits, case-sensitive.
//! Parentheses group as usual and whitespace is insignificant.
//!
//! ## Basic Usage
//!
//! ```rust
//! let table = truthtable_rs::render("A && B").unwrap();
//! assert_eq!(table.lines().nth(1).unwrap(), "|A|B|A && B|");
//! ```
//!
//! Or drive the passes yourself:
//!
//! ```rust
//! use truthtable_rs::format::TableFormatter;
//! use truthtable_rs::parser::parse;
//! use truthtable_rs::table::build_table;
//!
//! let text = "!A || B";
//! let (expr, vars) = parse(text).unwrap();
//! let rows = build_table(&expr, &vars).unwrap();
//! let rendered = TableFormatter::new(&vars, text).format(&rows);
//! assert_eq!(rows.len(), 4);
//! # let _ = rendered;
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]**: turns text into a lazy token stream.
//! - **[`parser`]**: builds the expression tree and collects the variables
//!   in first-occurrence order.
//! - **[`table`]**: enumerates all `2^n` assignments and evaluates each row.
//! - **[`format`]**: renders the rows as a bordered text table.
//!
//! Row order is deterministic: row `i`'s assignment is the binary
//! representation of `i`, most-significant bit first. The whole pipeline is
//! all-or-nothing; no partial table is ever produced.

use thiserror::Error;

pub mod eval;
pub mod expr;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod token;

/// Any failure of the parse/evaluate/format pipeline.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] lexer::LexError),
    #[error(transparent)]
    Parse(#[from] parser::ParseError),
    #[error(transparent)]
    Table(#[from] table::TableError),
}

impl Error {
    /// Character position of the offending input, where one exists.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.position),
            Error::Parse(err) => Some(err.position),
            Error::Table(_) => None,
        }
    }
}

/// Parses `text` and renders its complete truth table.
///
/// The verbatim `text` becomes the result column of the table header, so
/// callers should trim surrounding whitespace first.
pub fn render(text: &str) -> Result<String, Error> {
    let (expr, vars) = parser::parse(text)?;
    let rows = table::build_table(&expr, &vars)?;
    Ok(format::TableFormatter::new(&vars, text).format(&rows))
}
