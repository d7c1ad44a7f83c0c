//! Billing-row ingestion from uploaded text.

use tracing::debug;

/// Rows split from a text payload: line breaks first, then commas.
///
/// The first row is treated as a header by convention and is not
/// validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Vec<String>>,
}

impl RowSet {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Every row after the header.
    pub fn records(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Splits a billing export into rows of fields. CRLF input is tolerated;
/// empty lines are dropped. Fields are not unquoted or unescaped.
pub fn parse_rows(text: &str) -> RowSet {
    let rows: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();

    debug!(records = rows.len().saturating_sub(1), "parsed billing rows");
    RowSet { rows }
}
