//! Parsing raw tab-separated text into datasets of records

use crate::error::{Result, TabalignError};
use indexmap::IndexMap;

/// A single data row: trimmed cell values in original column order.
///
/// Records are immutable once parsed and are owned by the [`Dataset`] that
/// produced them. Programmatic access by field name goes through the owning
/// dataset's identifier map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// All cell values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Cell value at a column index. Rows shorter than the header read as
    /// empty in the missing columns, which compares equal to a blank cell.
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }
}

/// One parsed dataset: the header row (human-readable and normalized) plus
/// all data rows.
///
/// `headers[i]` and the i-th key of `fields` always describe the same column.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    fields: IndexMap<String, usize>,
    records: Vec<Record>,
}

impl Dataset {
    /// Parse raw text where lines are records and cells are tab-delimited,
    /// with the first non-blank line as the header row.
    ///
    /// Blank lines (empty after trimming) are dropped before header detection,
    /// so leading or trailing blank lines never shift the header or corrupt
    /// row counts. Every cell is trimmed of surrounding whitespace. A dataset
    /// with zero data rows is valid; input with no header row at all is
    /// rejected because it defines no columns to compare.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut lines = raw.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| TabalignError::invalid_input("dataset has no header row"))?;
        let headers: Vec<String> = header_line
            .split('\t')
            .map(|cell| cell.trim().to_string())
            .collect();

        let mut fields = IndexMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let id = field_identifier(header);
            if fields.insert(id.clone(), index).is_some() {
                return Err(TabalignError::invalid_input(format!(
                    "duplicate field identifier '{}' derived from column header '{}'",
                    id, header
                )));
            }
        }

        let records = lines
            .map(|line| {
                Record::new(
                    line.split('\t')
                        .map(|cell| cell.trim().to_string())
                        .collect(),
                )
            })
            .collect();

        Ok(Self {
            headers,
            fields,
            records,
        })
    }

    /// Human-readable column headers, trimmed, in original order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Ordered map from normalized field identifier to column index.
    pub fn fields(&self) -> &IndexMap<String, usize> {
        &self.fields
    }

    /// Column index for a normalized field identifier.
    pub fn field_index(&self, id: &str) -> Option<usize> {
        self.fields.get(id).copied()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Derive a normalized field identifier from raw column header text.
///
/// Trims, replaces `/`, `(`, `)` with spaces, collapses whitespace runs, then
/// camel-cases: first word lowercased, each following word capitalized. Pure
/// and deterministic, so the same header text yields the same identifier in
/// every dataset.
pub fn field_identifier(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '(' | ')' => ' ',
            c => c,
        })
        .collect();

    let mut words = cleaned.split_whitespace();
    let mut id = String::new();
    if let Some(first) = words.next() {
        id.push_str(&first.to_lowercase());
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            id.extend(first.to_uppercase());
            id.push_str(&chars.as_str().to_lowercase());
        }
    }
    id
}
