// src/format.rs
//! Output formats for rendered reports.
//!
//! Each format supplies three fragments: a header, one fragment per included
//! item, and a footer carrying the running total. Fragments are concatenated
//! by the generator in that order.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;
use crate::types::{Item, User};

const CSV_HEADER: &str = "ID,NOME,VALOR,USUARIO\n";
const BOLD_STYLE: &str = " style=\"font-weight:bold;\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Comma-joined lines. No quoting or escaping of embedded commas or newlines.
    Csv,
    /// A single HTML table. Text is inserted without entity escaping.
    Html,
}

impl ReportFormat {
    /// Identifier accepted by [`ReportFormat::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Html => "HTML",
        }
    }

    /// Opening fragment. The CSV header does not depend on `user`.
    #[must_use]
    pub fn header(self, user: &User) -> String {
        match self {
            Self::Csv => CSV_HEADER.to_string(),
            Self::Html => format!(
                "<html><body>\n<h1>Relatório</h1>\n<h2>Usuário: {}</h2>\n<table>\n<tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
                user.name
            ),
        }
    }

    /// Fragment for one included item.
    ///
    /// `user` is only read by the CSV format; HTML rows mark `priority`
    /// items in bold instead.
    #[must_use]
    pub fn format_item(self, item: &Item, user: &User) -> String {
        match self {
            Self::Csv => format!("{},{},{},{}\n", item.id, item.name, item.value, user.name),
            Self::Html => {
                let style = if item.priority { BOLD_STYLE } else { "" };
                format!(
                    "<tr{style}><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    item.id, item.name, item.value
                )
            }
        }
    }

    /// Closing fragment carrying the total of the included values.
    #[must_use]
    pub fn footer(self, total: f64) -> String {
        match self {
            Self::Csv => format!("\nTotal,,\n{total},,\n"),
            Self::Html => format!("</table>\n<h3>Total: {total}</h3>\n</body></html>\n"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    /// Exact, case-sensitive match on `CSV` or `HTML`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSV" => Ok(Self::Csv),
            "HTML" => Ok(Self::Html),
            other => Err(ReportError::InvalidReportType(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
