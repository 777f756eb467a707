//! Rendering a [`GroupBook`] for stdout.

use std::fmt::Write;

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::book::GroupBook;
use crate::config::OutputFormat;

/// Per-group summary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub items: usize,
    /// Serialized as a decimal string.
    pub total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub groups: Vec<GroupSummary>,
    pub grand_total: BigDecimal,
}

impl Report {
    pub fn from_book(book: &GroupBook) -> Self {
        let groups = book
            .groups()
            .iter()
            .map(|g| GroupSummary {
                key: g.key().to_string(),
                items: g.len(),
                total: g.total(),
            })
            .collect();

        Self {
            groups,
            grand_total: book.grand_total(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let key_width = self
            .groups
            .iter()
            .map(|g| g.key.chars().count())
            .chain(std::iter::once("TOTAL".len()))
            .max()
            .unwrap_or(0);

        // Writing into a String cannot fail.
        let mut out = String::new();
        for g in &self.groups {
            let _ = writeln!(out, "{:<key_width$}  {:>5}  {}", g.key, g.items, g.total);
        }
        let _ = writeln!(out, "{:<key_width$}  {:>5}  {}", "TOTAL", "", self.grand_total);
        out
    }
}
