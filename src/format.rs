//! Plain-text rendering of truth table rows.

use crate::expr::VarSet;
use crate::table::TableRow;

/// Renders rows as a bordered table.
///
/// The header lists each variable name and then the verbatim expression
/// text as the result column. A full-width dash line is placed before the
/// header, after the header, and after every data row:
///
/// ```text
/// ------------
/// |A|B|A && B|
/// ------------
/// |0|0|     0|
/// ------------
/// |0|1|     0|
/// ------------
/// |1|0|     0|
/// ------------
/// |1|1|     1|
/// ------------
/// ```
///
/// Values are right-aligned: variable columns to the width of the variable
/// name, the result column to the width of the expression text.
#[derive(Debug, Clone)]
pub struct TableFormatter {
    header: String,
    separator: String,
    var_widths: Vec<usize>,
    result_width: usize,
}

impl TableFormatter {
    pub fn new(vars: &VarSet, expression: &str) -> Self {
        let header = format!("|{}|{}|", vars.names().join("|"), expression);
        let separator = "-".repeat(header.chars().count());
        let var_widths = vars.iter().map(|name| name.chars().count()).collect();
        let result_width = expression.chars().count();
        Self {
            header,
            separator,
            var_widths,
            result_width,
        }
    }

    pub fn format(&self, rows: &[TableRow]) -> String {
        let mut out = String::new();
        out.push_str(&self.separator);
        out.push('\n');
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&self.separator);
        out.push('\n');
        for row in rows {
            for (&value, &width) in row.values.iter().zip(&self.var_widths) {
                out.push_str(&format!("|{:>width$}", bit(value)));
            }
            out.push_str(&format!("|{:>width$}|\n", bit(row.result), width = self.result_width));
            out.push_str(&self.separator);
            out.push('\n');
        }
        out
    }
}

fn bit(value: bool) -> u8 {
    value as u8
}
